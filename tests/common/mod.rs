#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use genomehier::prelude::*;

pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

pub fn load_records(name: &str) -> anyhow::Result<Vec<RawFeature>> {
    let path = data_path(name);
    let file = File::open(&path).with_context(|| format!("Missing fixture {}", path.display()))?;
    read_gff(file)
}

/// Routes library logs through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = pretty_env_logger::formatted_builder()
        .is_test(true)
        .try_init();
}

pub fn full_config() -> ReconcileConfig {
    ReconcileConfig::default()
        .with_generate_ids_if_needed(true)
        .with_generate_missing_genes(true)
        .with_genetic_code(Some(11))
}

/// Every parent/child and mRNA/CDS link of a genome, independent of bucket
/// order and warnings.
#[derive(Debug, PartialEq, Eq)]
pub struct Links {
    pub coding:     BTreeSet<String>,
    pub non_coding: BTreeSet<(String, Option<String>)>,
    pub mrnas:      BTreeSet<(String, Option<String>, Option<String>)>,
    pub cdss:       BTreeSet<(String, Option<String>, Option<String>)>,
}

impl Links {
    pub fn of(genome: &Genome) -> Self {
        Self {
            coding:     genome
                .features()
                .iter()
                .map(|g| g.id().clone())
                .collect(),
            non_coding: genome
                .non_coding_features()
                .iter()
                .map(|f| (f.id().clone(), f.parent_gene().clone()))
                .collect(),
            mrnas:      genome
                .mrnas()
                .iter()
                .map(|m| (m.id().clone(), m.parent_gene().clone(), m.cds().clone()))
                .collect(),
            cdss:       genome
                .cdss()
                .iter()
                .map(|c| {
                    (
                        c.id().clone(),
                        c.parent_gene().clone(),
                        c.parent_mrna().clone(),
                    )
                })
                .collect(),
        }
    }
}
