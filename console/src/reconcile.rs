use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use genomehier::prelude::*;
use itertools::Itertools;
use log::info;

use crate::utils::{
    open_input,
    open_output,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct ReconcileArgs {
    #[arg(value_parser, help = "Path to the GFF3 input. Reads stdin when omitted.")]
    input: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_parser,
        help = "Path to the output Genome JSON. Writes to stdout when omitted."
    )]
    output: Option<PathBuf>,

    #[arg(
        long,
        value_parser,
        help = "JSON file with reconciliation parameters. Flags override its values."
    )]
    params: Option<PathBuf>,

    #[arg(long, help = "Generate identifiers for features that have none.")]
    generate_ids: bool,

    #[arg(
        long,
        help = "Create a gene for every mRNA or CDS without a containing gene."
    )]
    generate_missing_genes: bool,

    #[arg(long, help = "Genetic code recorded on coding sequences.")]
    genetic_code: Option<u32>,

    #[arg(long, help = "Pretty-print the JSON output.")]
    pretty: bool,

    #[arg(long, help = "List every feature warning in the summary.")]
    show_warnings: bool,
}

impl ReconcileArgs {
    fn config(&self) -> anyhow::Result<ReconcileConfig> {
        let mut config = match &self.params {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                ReconcileConfig::from_json_reader(file)?
            },
            None => ReconcileConfig::default(),
        };
        if self.generate_ids {
            config = config.with_generate_ids_if_needed(true);
        }
        if self.generate_missing_genes {
            config = config.with_generate_missing_genes(true);
        }
        if self.genetic_code.is_some() {
            config = config.with_genetic_code(self.genetic_code);
        }
        Ok(config)
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.config()?;
        info!("Using {:?}", config);

        let records = read_gff(open_input(self.input.as_ref())?)?;
        let genome = reconcile(records, &config)?;

        let mut sink = open_output(self.output.as_ref())?;
        if self.pretty {
            serde_json::to_writer_pretty(&mut sink, &genome)?;
        }
        else {
            serde_json::to_writer(&mut sink, &genome)?;
        }
        writeln!(sink)?;
        sink.flush().context("Failed to flush output")?;

        self.summary(&genome);
        Ok(())
    }

    fn summary(
        &self,
        genome: &Genome,
    ) {
        eprintln!(
            "[{}] {} coding genes, {} non-coding features, {} mRNAs, {} CDSs",
            style("V").green(),
            style(genome.features().len()).green(),
            style(genome.non_coding_features().len()).green(),
            style(genome.mrnas().len()).green(),
            style(genome.cdss().len()).green(),
        );
        for warning in genome.warnings() {
            eprintln!("[{}] {}", style("!").yellow(), warning);
        }

        let flagged = genome
            .iter()
            .filter(|f| !f.warnings().is_empty())
            .collect_vec();
        if !flagged.is_empty() {
            eprintln!(
                "{} features carry warnings",
                style(flagged.len()).yellow()
            );
        }
        if self.show_warnings {
            for feature in flagged {
                for warning in feature.warnings() {
                    eprintln!("\t{}\t{}", feature.id(), warning);
                }
            }
        }
        if genome.suspect() {
            eprintln!(
                "[{}] Genome is {}",
                style("!").red(),
                style("suspect").red()
            );
        }
    }
}
