use arcstr::ArcStr;

/// 1-based genomic coordinate.
pub type PosType = u64;
/// Contig (sequence) name. Cheap to clone, shared by every segment on the
/// same contig.
pub type ContigName = ArcStr;
/// Final, unique feature identifier.
pub type FeatureId = String;
