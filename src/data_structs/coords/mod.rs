//! Genomic coordinates of annotated features.
//!
//! - [`Segment`]: one exon segment, `(contig, start, strand, length)` with
//!   `start` at the 5' end.
//! - [`Footprint`]: the overall `(contig, min, max, strand)` span of a
//!   feature.
//!
//! The free functions in this module are the interval model the reconciler
//! relies on. They are pure functions of their inputs.

mod footprint;
mod segment;

use std::collections::BTreeSet;

pub use footprint::Footprint;
pub use segment::Segment;

use crate::data_structs::enums::BoundaryRole;
use crate::data_structs::typedef::PosType;

/// Set of internal splice junctions of a feature.
pub type Boundaries = BTreeSet<(PosType, BoundaryRole)>;

/// Computes the footprint of a feature.
///
/// The contig and strand are taken from the first segment. Only segments on
/// that contig and strand contribute to the span. Returns `None` for an
/// empty location.
pub fn footprint(segments: &[Segment]) -> Option<Footprint> {
    let first = segments.first()?;
    let (min, max) = segments
        .iter()
        .filter(|s| s.same_track(first))
        .fold((PosType::MAX, PosType::MIN), |(min, max), s| {
            (min.min(s.left()), max.max(s.right()))
        });
    Some(Footprint::new(
        first.contig().clone(),
        min,
        max,
        first.strand(),
    ))
}

/// True iff every child segment shares the parent's contig and strand and
/// lies within `[parent.min, parent.max]`. An empty child is never contained.
pub fn contains(
    parent: &Footprint,
    child: &[Segment],
) -> bool {
    !child.is_empty() && child.iter().all(|s| parent.covers(s))
}

/// Returns the segments ordered 5' to 3' along the strand of the first
/// segment.
pub fn transcription_order(segments: &[Segment]) -> Vec<Segment> {
    let reverse = segments
        .first()
        .map(|s| s.strand().is_reverse())
        .unwrap_or(false);
    let mut ordered = segments.to_vec();
    ordered.sort_by_key(|s| s.left());
    if reverse {
        ordered.reverse();
    }
    ordered
}

/// Internal exon boundaries: every 5' and 3' segment end except the 5' end
/// of the first segment and the 3' end of the last one, after ordering the
/// segments by transcription direction.
pub fn internal_boundaries(segments: &[Segment]) -> Boundaries {
    let ordered = transcription_order(segments);
    let last = ordered.len().saturating_sub(1);
    ordered
        .iter()
        .enumerate()
        .flat_map(|(idx, segment)| {
            let start = (idx != 0)
                .then(|| (segment.five_prime(), BoundaryRole::Start));
            let end = (idx != last)
                .then(|| (segment.three_prime(), BoundaryRole::End));
            start.into_iter().chain(end)
        })
        .collect()
}

#[cfg(test)]
mod tests;
