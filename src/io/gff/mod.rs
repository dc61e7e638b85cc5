//! GFF3 adapter: flat annotation text in, reconciled genome out, and back.
//!
//! Reading only groups lines into records. Relationships are inferred later
//! from coordinates, so `Parent` tags of features are not trusted. They are
//! written back from the resolved hierarchy.

mod entry;
mod read;
mod write;

pub use entry::{
    GffAttributes,
    RawGffEntry,
};
pub use read::read_gff;
pub use write::{
    cds_phases,
    write_gff,
};

/// Line types the reader skips.
pub const IGNORED_TYPES: &[&str] = &[
    "region",
    "five_prime_UTR",
    "three_prime_UTR",
    "UTR",
    "start_codon",
    "stop_codon",
    "intron",
];

pub(crate) const SOURCE_NAME: &str = "genomehier";
pub(crate) const TAG_PRODUCT: &str = "product";
pub(crate) const TAG_FUNCTION: &str = "function";
pub(crate) const TAG_TRANSLATION: &str = "translation";
pub(crate) const TAG_PSEUDO: &str = "pseudo";
