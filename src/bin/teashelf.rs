//! Teashelf CLI Binary
//!
//! Command-line interface for the tea catalog.

use anyhow::Context;
use clap::Parser;
use std::process;
use teashelf::logging::init_logging;
use teashelf::tooling::cli::{Cli, CliContext};

fn run(cli: &Cli) -> anyhow::Result<String> {
    let context = CliContext::new(cli.config.clone(), cli.data_file.clone())
        .context("Error initializing teashelf")?;

    let mut logging = context.config().logging.clone();
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        logging.format = format.clone();
    }
    init_logging(Some(&logging)).context("Error initializing logging")?;

    Ok(context.execute(&cli.command)?)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
