use std::fs::File;
use std::io::{
    stdin,
    stdout,
    BufReader,
    BufWriter,
    Read,
    Write,
};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use log::LevelFilter;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v info, -vv debug). RUST_LOG \
                takes precedence when set."
    )]
    pub verbose: u8,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        let mut builder = pretty_env_logger::formatted_builder();
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        else {
            builder.filter_level(match self.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                _ => LevelFilter::Debug,
            });
        }
        builder.try_init().context("Failed to set up logger")
    }
}

/// Opens `path` for reading, or stdin when it is absent or `-`.
pub(crate) fn open_input(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Read>> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        },
        _ => Ok(Box::new(stdin().lock())),
    }
}

/// Creates `path` for writing, or stdout when it is absent.
pub(crate) fn open_output(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        },
        None => Ok(Box::new(BufWriter::new(stdout().lock()))),
    }
}
