//! File formats the reconciled hierarchy is read from and written to.
//!
//! Only GFF3 is supported. Genome JSON is plain `serde_json` over
//! [`Genome`](crate::data_structs::Genome) and needs no module of its own.

pub mod gff;
