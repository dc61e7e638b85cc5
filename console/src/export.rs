use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use genomehier::prelude::*;
use log::info;

use crate::utils::{
    open_input,
    open_output,
};

#[derive(Args, Debug, Clone)]
pub(crate) struct ExportArgs {
    #[arg(value_parser, help = "Path to the Genome JSON. Reads stdin when omitted.")]
    input: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_parser,
        help = "Path to the GFF3 output. Writes to stdout when omitted."
    )]
    output: Option<PathBuf>,
}

impl ExportArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let genome: Genome = serde_json::from_reader(open_input(self.input.as_ref())?)
            .context("Failed to parse Genome JSON")?;
        info!("Exporting {} features", genome.len());

        let mut sink = open_output(self.output.as_ref())?;
        write_gff(&genome, &mut sink)?;
        sink.flush().context("Failed to flush output")?;
        Ok(())
    }
}
