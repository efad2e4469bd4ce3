mod cli;
mod config;
mod convert;
mod generate_cmd;
mod limits_cmd;
mod logging;
mod wav;

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
        Command::Generate(args) => generate_cmd::run(args),
        Command::Limits(args) => limits_cmd::run(args),
    }
}
