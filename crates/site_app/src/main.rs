mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::logging::LogDestination;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let destination = match cli.log_file.clone() {
        Some(path) => LogDestination::Both(path),
        None => LogDestination::Terminal,
    };
    logging::initialize(destination, cli.verbose);

    commands::run(cli)
}
