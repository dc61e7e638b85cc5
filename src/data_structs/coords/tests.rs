use arcstr::ArcStr;
use rstest::rstest;

use super::*;
use crate::data_structs::enums::{
    BoundaryRole,
    Strand,
};

fn fwd(
    left: u64,
    right: u64,
) -> Segment {
    Segment::from_bounds(ArcStr::from("chr1"), left, right, Strand::Forward)
}

fn rev(
    left: u64,
    right: u64,
) -> Segment {
    Segment::from_bounds(ArcStr::from("chr1"), left, right, Strand::Reverse)
}

#[test]
fn test_segment_bounds() {
    let forward = Segment::new(ArcStr::from("chr1"), 100, Strand::Forward, 51);
    assert_eq!(forward.left(), 100);
    assert_eq!(forward.right(), 150);
    assert_eq!(forward.five_prime(), 100);
    assert_eq!(forward.three_prime(), 150);

    let reverse = Segment::new(ArcStr::from("chr1"), 150, Strand::Reverse, 51);
    assert_eq!(reverse.left(), 100);
    assert_eq!(reverse.right(), 150);
    assert_eq!(reverse.five_prime(), 150);
    assert_eq!(reverse.three_prime(), 100);
    assert_eq!(rev(100, 150), reverse);
}

#[rstest]
#[case::ok(Segment::new(ArcStr::from("chr1"), 10, Strand::Forward, 5), true)]
#[case::zero_length(Segment::new(ArcStr::from("chr1"), 10, Strand::Forward, 0), false)]
#[case::zero_start(Segment::new(ArcStr::from("chr1"), 0, Strand::Forward, 5), false)]
#[case::reverse_underflow(Segment::new(ArcStr::from("chr1"), 3, Strand::Reverse, 5), false)]
#[case::no_contig(Segment::new(ArcStr::from(""), 3, Strand::Forward, 5), false)]
fn test_segment_validity(
    #[case] segment: Segment,
    #[case] expected: bool,
) {
    assert_eq!(segment.is_valid(), expected);
}

#[test]
fn test_footprint_spans_segments() {
    let fp = footprint(&[fwd(500, 600), fwd(100, 200), fwd(300, 400)]).unwrap();
    assert_eq!(fp.min(), 100);
    assert_eq!(fp.max(), 600);
    assert_eq!(fp.length(), 501);
    assert_eq!(fp.strand(), Strand::Forward);
    assert_eq!(fp.to_string(), "chr1:100-600 (+)");
    assert!(footprint(&[]).is_none());
}

#[test]
fn test_footprint_ignores_other_tracks() {
    let other = Segment::from_bounds(ArcStr::from("chr2"), 1, 10_000, Strand::Forward);
    let fp = footprint(&[fwd(100, 200), other]).unwrap();
    assert_eq!((fp.min(), fp.max()), (100, 200));
}

#[rstest]
#[case::inside(vec![fwd(120, 150), fwd(170, 190)], true)]
#[case::same_bounds(vec![fwd(100, 200)], true)]
#[case::overhang(vec![fwd(90, 150)], false)]
#[case::other_strand(vec![rev(120, 150)], false)]
#[case::empty(vec![], false)]
fn test_contains(
    #[case] child: Vec<Segment>,
    #[case] expected: bool,
) {
    let parent = footprint(&[fwd(100, 200)]).unwrap();
    assert_eq!(contains(&parent, &child), expected);
}

#[test]
fn test_internal_boundaries_forward() {
    let boundaries = internal_boundaries(&[fwd(300, 400), fwd(100, 200), fwd(500, 600)]);
    let expected: Boundaries = [
        (200, BoundaryRole::End),
        (300, BoundaryRole::Start),
        (400, BoundaryRole::End),
        (500, BoundaryRole::Start),
    ]
    .into_iter()
    .collect();
    assert_eq!(boundaries, expected);
}

#[test]
fn test_internal_boundaries_reverse() {
    // Listed left to right; transcription runs right to left.
    let boundaries = internal_boundaries(&[rev(100, 200), rev(300, 400)]);
    let expected: Boundaries = [(300, BoundaryRole::End), (200, BoundaryRole::Start)]
        .into_iter()
        .collect();
    assert_eq!(boundaries, expected);
}

#[test]
fn test_internal_boundaries_ignore_utr() {
    let mrna = internal_boundaries(&[fwd(100, 200), fwd(300, 400), fwd(500, 600)]);
    let cds = internal_boundaries(&[fwd(150, 200), fwd(300, 400), fwd(500, 550)]);
    assert_eq!(mrna, cds);
    assert!(internal_boundaries(&[fwd(1, 10)]).is_empty());
}

#[test]
fn test_transcription_order() {
    let ordered = transcription_order(&[rev(100, 200), rev(500, 600), rev(300, 400)]);
    let starts = ordered.iter().map(|s| s.five_prime()).collect::<Vec<_>>();
    assert_eq!(starts, vec![600, 400, 200]);
}

#[test]
fn test_from_bounds_extreme_coordinates() {
    let whole = Segment::from_bounds(ArcStr::from("chr1"), 0, u64::MAX, Strand::Forward);
    assert_eq!(whole.length(), u64::MAX);
    assert!(!whole.is_valid());

    let swapped = Segment::from_bounds(ArcStr::from("chr1"), 200, 100, Strand::Forward);
    assert_eq!(swapped, fwd(100, 200));
}

#[test]
#[should_panic]
fn test_footprint_rejects_inverted_bounds() {
    Footprint::new(ArcStr::from("chr1"), 200, 100, Strand::Forward);
}

#[test]
fn test_footprint_covers_segment() {
    let span = footprint(&[fwd(100, 200), fwd(300, 400)]).unwrap();
    assert!(span.covers(&fwd(150, 350)));
    assert!(!span.covers(&rev(150, 350)));
    assert!(!span.covers(&fwd(50, 150)));
    assert_eq!(span.as_segment(), fwd(100, 400));
}
