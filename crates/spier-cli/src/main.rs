//! Spier CLI entry point.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

mod cli;
mod commands;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.execute() {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let installed = if verbose {
        spier_core::log::init_with_filter("spier=debug")
    } else {
        spier_core::log::init_default()
    };

    if let Err(e) = installed {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }
}
