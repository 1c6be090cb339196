//! # four-key CLI
//!
//! This is the binary entry point for the `four-key` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors and translating them into user-friendly
//!   output.
//!
//! The registry logic lives in the `four_key` library crate; the binary only
//! wires it to the command line.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => cli::exit_with_parse_error(error),
    };
    cli.execute()
}
