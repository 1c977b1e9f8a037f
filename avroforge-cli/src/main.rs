//! avroforge command line.
//!
//! Run with: `avroforge compile -a schemas -p src/generated`

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level, cli.log_format)?;

    match cli.command {
        Command::ListDrivers => commands::list_drivers(&mut std::io::stdout()),
        Command::Compile(args) => commands::compile(&args),
    }
}
