mod export;
mod reconcile;
mod utils;

use clap::{
    Parser,
    Subcommand,
};
use export::ExportArgs;
use reconcile::ReconcileArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Reconcile a GFF3 file into Genome JSON.
    Reconcile {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ReconcileArgs,
    },

    /// Write Genome JSON back as GFF3.
    Export {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ExportArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Reconcile { utils, args } => {
            utils.setup()?;
            args.run()?;
        },
        MainMenu::Export { utils, args } => {
            utils.setup()?;
            args.run()?;
        },
    }
    Ok(())
}
