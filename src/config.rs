use std::io::Read;

use anyhow::Context;
use serde::{
    Deserialize,
    Serialize,
};

use crate::with_field_fn;

/// Caller-supplied switches of a reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Synthesize identifiers for records that do not carry one.
    pub generate_ids_if_needed: bool,
    /// Create a gene for mRNA and CDS records no gene contains.
    pub generate_missing_genes: bool,
    /// Copied to the genome and to every CDS as is.
    pub genetic_code:           Option<u32>,
}

impl ReconcileConfig {
    with_field_fn!(generate_ids_if_needed, bool);

    with_field_fn!(generate_missing_genes, bool);

    with_field_fn!(genetic_code, Option<u32>);

    /// Reads a JSON parameter object. Missing keys keep their defaults.
    pub fn from_json_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("Failed to parse reconciliation parameters")
    }
}
