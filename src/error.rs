//! Error types of the reconciliation pass.
//!
//! [`ReconError`] aborts the pass. [`RecordError`] only removes one record
//! from it; its `Display` text is what ends up in the genome warnings.

use thiserror::Error;

use crate::data_structs::coords::Segment;

/// Fatal failure of a reconciliation pass. No partial genome is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconError {
    /// A capability the input needs was switched off by the caller.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Nothing left to reconcile after malformed records were dropped.
    #[error("no usable feature records in input ({dropped} dropped)")]
    EmptyInput { dropped: usize },
}

impl ReconError {
    pub(crate) fn missing_id(what: impl std::fmt::Display) -> Self {
        ReconError::Configuration(format!(
            "{} has no identifier and identifier generation is disabled",
            what
        ))
    }
}

/// A single malformed record. The record is dropped and the pass continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Feature {name} of unknown type '{feature_type}' was skipped")]
    UnknownType { name: String, feature_type: String },

    #[error("Feature {name} has no location and was skipped")]
    EmptyLocation { name: String },

    #[error("Feature {name} has an invalid location segment {segment} and was skipped")]
    InvalidSegment { name: String, segment: Segment },
}
