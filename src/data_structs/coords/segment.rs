use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::{
    ContigName,
    PosType,
};

/// One exon segment of a feature location.
///
/// Coordinates are 1-based and inclusive. `start` is the 5'-most base on the
/// segment's strand, so on the reverse strand it is the *highest* coordinate
/// covered and the segment extends `length - 1` bases to the left of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    contig: ContigName,
    start:  PosType,
    strand: Strand,
    length: PosType,
}

impl Segment {
    /// Creates a segment from its 5' start and length. No validation is done
    /// here, see [`Segment::is_valid`].
    pub fn new(
        contig: ContigName,
        start: PosType,
        strand: Strand,
        length: PosType,
    ) -> Self {
        Self {
            contig,
            start,
            strand,
            length,
        }
    }

    /// Creates a segment from absolute, inclusive `left..=right` bounds.
    pub fn from_bounds(
        contig: ContigName,
        left: PosType,
        right: PosType,
        strand: Strand,
    ) -> Self {
        let (left, right) = if left <= right {
            (left, right)
        }
        else {
            (right, left)
        };
        let start = if strand.is_reverse() { right } else { left };
        Self::new(contig, start, strand, (right - left).saturating_add(1))
    }

    pub fn contig(&self) -> &ContigName {
        &self.contig
    }

    pub fn start(&self) -> PosType {
        self.start
    }

    pub fn strand(&self) -> Strand {
        self.strand
    }

    pub fn length(&self) -> PosType {
        self.length
    }

    /// A segment is well formed when it is non-empty and lies entirely in
    /// positive 1-based coordinates.
    pub fn is_valid(&self) -> bool {
        self.length > 0
            && self.start > 0
            && !self.contig.is_empty()
            && (!self.strand.is_reverse() || self.start >= self.length)
    }

    /// Lowest coordinate covered.
    pub fn left(&self) -> PosType {
        if self.strand.is_reverse() {
            self.start
                .saturating_sub(self.length.saturating_sub(1))
        }
        else {
            self.start
        }
    }

    /// Highest coordinate covered.
    pub fn right(&self) -> PosType {
        if self.strand.is_reverse() {
            self.start
        }
        else {
            self.start
                .saturating_add(self.length.saturating_sub(1))
        }
    }

    /// Coordinate of the 5' end along the strand.
    pub fn five_prime(&self) -> PosType {
        self.start
    }

    /// Coordinate of the 3' end along the strand.
    pub fn three_prime(&self) -> PosType {
        if self.strand.is_reverse() {
            self.left()
        }
        else {
            self.right()
        }
    }

    /// Whether both segments sit on the same contig and strand.
    pub fn same_track(
        &self,
        other: &Self,
    ) -> bool {
        self.contig == other.contig && self.strand == other.strand
    }
}

impl Display for Segment {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{} ({})",
            self.contig,
            self.left(),
            self.right(),
            self.strand
        )
    }
}
