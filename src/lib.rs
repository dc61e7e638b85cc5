//! # genomehier
//!
//! `genomehier` turns flat lists of annotated genomic features into a
//! consistent, cross-referenced hierarchy of genes, mRNAs, coding sequences
//! and non-coding features.
//!
//! Annotation records rarely carry reliable parent/child references, so
//! every relationship is inferred from coordinates: containment on the same
//! contig and strand decides which gene owns a transcript or CDS, and equal
//! internal exon boundaries decide which mRNA a CDS belongs to. Every
//! ambiguity or failure is reported as a warning on the affected feature and
//! never silently resolved.
//!
//! ## Structure
//!
//! * [`data_structs`]: segments, footprints and the interval predicates,
//!   the raw record model and the reconciled [`Genome`].
//! * [`recon`]: the reconciliation pass ([`reconcile`]).
//! * [`io`]: GFF3 reading and writing.
//! * [`config`] and [`error`]: pass configuration and error types.
//!
//! ## Usage
//!
//! ```no_run
//! use std::fs::File;
//! use genomehier::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let records = read_gff(File::open("annotation.gff3")?)?;
//!     let config = ReconcileConfig::default()
//!         .with_generate_ids_if_needed(true)
//!         .with_generate_missing_genes(true);
//!
//!     let genome = reconcile(records, &config)?;
//!     println!(
//!         "{} coding genes, {} mRNAs, suspect: {}",
//!         genome.features().len(),
//!         genome.mrnas().len(),
//!         genome.suspect()
//!     );
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod recon;
pub mod utils;

pub use data_structs::Genome;
pub use recon::reconcile;
