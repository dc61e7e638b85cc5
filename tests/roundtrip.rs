use genomehier::prelude::*;
use rstest::*;

mod common;
use common::{
    full_config,
    init_logger,
    load_records,
    Links,
};

#[fixture]
fn genome() -> Genome {
    init_logger();
    reconcile(load_records("chr4_loci.gff3").unwrap(), &full_config()).unwrap()
}

#[rstest]
fn test_raw_feature_roundtrip(genome: Genome) {
    let again = reconcile(genome.to_raw_features(), &full_config()).unwrap();
    assert_eq!(Links::of(&again), Links::of(&genome));
    // The spoofed gene is an ordinary input gene the second time.
    assert!(again
        .mrna("orphan.1")
        .unwrap()
        .warnings()
        .is_empty());
    assert!(again.warnings().is_empty());
}

#[rstest]
fn test_gff_roundtrip(genome: Genome) -> anyhow::Result<()> {
    let mut buffer = Vec::new();
    write_gff(&genome, &mut buffer)?;
    let again = reconcile(read_gff(buffer.as_slice())?, &ReconcileConfig::default())?;

    assert_eq!(Links::of(&again), Links::of(&genome));
    assert_eq!(
        again
            .mrna("AT4G00030.1")
            .unwrap()
            .warnings(),
        genome
            .mrna("AT4G00030.1")
            .unwrap()
            .warnings()
    );
    Ok(())
}

#[rstest]
fn test_json_roundtrip(genome: Genome) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&genome)?;
    let parsed: Genome = serde_json::from_str(&json)?;
    assert_eq!(parsed, genome);

    let value: serde_json::Value = serde_json::from_str(&json)?;
    let cds = &value["cdss"][0];
    assert_eq!(cds["id"], "AT4G00010.1-Protein");
    assert_eq!(cds["parent_mrna"], "AT4G00010.1");
    assert_eq!(cds["protein_translation_length"], 4);
    assert_eq!(value["features"][1]["location"][0]["strand"], "-");
    Ok(())
}
