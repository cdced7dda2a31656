mod cli;
mod config;
mod correlate_cmd;
mod logging;
mod residuals_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Residuals(args) => residuals_cmd::run(args),
        Command::Correlate(args) => correlate_cmd::run(args),
    }
}
