mod cli;
mod config;
mod convert;
mod day_cmd;
mod groups_cmd;
mod logging;
mod week_cmd;

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
        Command::Week(args) => week_cmd::run(args),
        Command::Day(args) => day_cmd::run(args),
        Command::Groups(args) => groups_cmd::run(args),
    }
}
