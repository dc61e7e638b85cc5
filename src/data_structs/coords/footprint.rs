use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use super::Segment;
use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::{
    ContigName,
    PosType,
};

/// Overall span of a feature: contig, inclusive `min..=max` and strand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    contig: ContigName,
    min:    PosType,
    max:    PosType,
    strand: Strand,
}

impl Footprint {
    /// Creates a new `Footprint`.
    ///
    /// # Panics
    ///
    /// Panics if `min` is greater than `max`. Use [`footprint`] to derive a
    /// footprint from segments without that risk.
    ///
    /// [`footprint`]: fn@super::footprint
    pub fn new(
        contig: ContigName,
        min: PosType,
        max: PosType,
        strand: Strand,
    ) -> Self {
        assert!(
            min <= max,
            "Start position must be less than or equal to end position"
        );
        Self {
            contig,
            min,
            max,
            strand,
        }
    }

    /// Returns the lowest covered coordinate.
    pub fn min(&self) -> PosType {
        self.min
    }

    /// Returns the highest covered coordinate.
    pub fn max(&self) -> PosType {
        self.max
    }

    /// Returns the strand of the footprint.
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Returns the contig name.
    pub fn contig(&self) -> &ContigName {
        &self.contig
    }

    /// Number of bases spanned, introns included.
    pub fn length(&self) -> PosType {
        self.max - self.min + 1
    }

    /// Checks if a single segment lies within this footprint on the same
    /// contig and strand.
    pub fn covers(
        &self,
        segment: &Segment,
    ) -> bool {
        segment.contig() == &self.contig
            && segment.strand() == self.strand
            && segment.left() >= self.min
            && segment.right() <= self.max
    }

    /// Single segment spanning the whole footprint.
    pub fn as_segment(&self) -> Segment {
        Segment::from_bounds(self.contig.clone(), self.min, self.max, self.strand)
    }
}

impl Display for Footprint {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{} ({})",
            self.contig, self.min, self.max, self.strand
        )
    }
}
