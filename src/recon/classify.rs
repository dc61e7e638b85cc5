use crate::data_structs::{
    is_locus_type,
    FeatureKind,
    RawFeature,
};
use crate::error::RecordError;

/// Type tags accepted as non-coding features besides pseudo genes and
/// pseudo CDSs.
pub const NON_CODING_TYPES: &[&str] = &[
    "ncRNA",
    "misc_RNA",
    "tRNA",
    "rRNA",
    "tmRNA",
    "snRNA",
    "snoRNA",
    "lncRNA",
    "lnc_RNA",
    "miRNA",
    "precursor_RNA",
    "transcript",
    "repeat_region",
    "mobile_element",
    "regulatory",
    "misc_feature",
    "rep_origin",
    "pseudogenic_transcript",
];

/// Buckets a raw record by its declared type and translatable content.
///
/// `index` is the record's position in the input and is only used to name
/// records without an identifier in the returned error.
pub fn classify(
    record: &RawFeature,
    index: usize,
) -> Result<FeatureKind, RecordError> {
    let pseudo = record.attributes.pseudo;
    let kind = match record.feature_type.as_str() {
        "gene" if !pseudo => FeatureKind::CodingGene,
        "gene" | "pseudogene" => FeatureKind::NonCodingGene,
        "mRNA" => FeatureKind::Transcript,
        "CDS" if !pseudo => FeatureKind::CodingSequence,
        "CDS" => FeatureKind::NonCodingGene,
        other if NON_CODING_TYPES.contains(&other) => FeatureKind::NonCodingGene,
        other => {
            return Err(RecordError::UnknownType {
                name:         record.display_name(index),
                feature_type: other.to_string(),
            })
        },
    };

    if record.segments.is_empty() {
        return Err(RecordError::EmptyLocation {
            name: record.display_name(index),
        });
    }
    if let Some(segment) = record
        .segments
        .iter()
        .find(|s| !s.is_valid())
    {
        return Err(RecordError::InvalidSegment {
            name:    record.display_name(index),
            segment: segment.clone(),
        });
    }
    Ok(kind)
}

/// Whether a classified record may own transcripts and coding sequences.
pub fn is_parent_candidate(
    record: &RawFeature,
    kind: FeatureKind,
) -> bool {
    match kind {
        FeatureKind::CodingGene => true,
        FeatureKind::NonCodingGene => is_locus_type(&record.feature_type),
        FeatureKind::Transcript | FeatureKind::CodingSequence => false,
    }
}
