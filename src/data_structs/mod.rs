//! Core data structures of the `genomehier` crate.
//!
//! - [`coords`]: exon [`Segment`]s, feature [`Footprint`]s and the interval
//!   predicates relationship inference is built on.
//! - [`RawFeature`]: a flat, parsed annotation record with its
//!   [`FeatureAttributes`].
//! - [`Genome`]: the reconciled hierarchy of [`Gene`]s,
//!   [`NonCodingFeature`]s, [`Mrna`]s and [`Cds`]s.
//! - Common enumerations, such as [`Strand`] and the classification
//!   [`FeatureKind`].
//! - [`typedef`]: type aliases for positions, contig names and identifiers.

pub mod coords;
mod enums;
mod feature;
mod genome;
pub mod typedef;

pub use enums::{
    BoundaryRole,
    FeatureKind,
    Strand,
};
pub use feature::{
    DbXref,
    FeatureAttributes,
    RawFeature,
};
pub use genome::{
    is_locus_type,
    Cds,
    CdsTranslation,
    FeatureAnnotations,
    FeatureRef,
    Gene,
    Genome,
    Mrna,
    NonCodingFeature,
    FLAG_PSEUDO,
    FLAG_TRANS_SPLICING,
};
