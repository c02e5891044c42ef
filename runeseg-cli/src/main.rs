//! runeseg command-line entry point

use clap::Parser;
use runeseg_cli::commands::Commands;

/// Unicode transcoding and text segmentation
#[derive(Debug, Parser)]
#[command(name = "runeseg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
