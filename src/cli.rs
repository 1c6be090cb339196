//! CLI argument parsing and command dispatch

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};

use four_key::defaults;
use four_key::output::OutputConfig;
use four_key::registry::RepositoryRegistry;
use four_key::store::FileConfigStore;

use crate::commands;

/// four-key - Manage the repositories analyzed by the four-key metrics pipeline
#[derive(Parser, Debug)]
#[command(name = "four-key")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Path to the repository registry file.
    ///
    /// Defaults to `repositories.yaml` in the platform config directory
    /// (`~/.config/four-key` on Linux).
    #[arg(long, global = true, value_name = "FILE", env = "FOUR_KEY_CONFIG")]
    config: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a repository to the config file
    Add(commands::add::AddArgs),

    /// Remove a repository from the config file
    Remove(commands::remove::RemoveArgs),

    /// List the repositories in the config file
    List(commands::list::ListArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        let config_path = self
            .config
            .unwrap_or_else(defaults::default_config_path);
        log::debug!("Using config file {}", config_path.display());
        let registry = RepositoryRegistry::new(FileConfigStore::new(config_path));

        match self.command {
            Commands::Add(args) => commands::add::execute(args, &registry, &output),
            Commands::Remove(args) => commands::remove::execute(args, &registry, &output),
            Commands::List(args) => commands::list::execute(args, &registry, &output),
        }
    }
}

/// Route library logs to stderr so stdout only carries command output.
fn init_logging(level: &str) {
    env_logger::Builder::new()
        .parse_filters(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Report a command-line parsing failure and exit.
///
/// Unknown flags are reported as `unknown flag: --<flag>`; every other
/// failure (including `--help` and `--version`) uses clap's own rendering.
pub fn exit_with_parse_error(error: clap::Error) -> ! {
    if error.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = error.get(ContextKind::InvalidArg) {
            eprintln!("Error: {}", unknown_flag_message(arg));
            if let Some(ContextValue::String(suggested)) = error.get(ContextKind::SuggestedArg) {
                eprintln!("\n  tip: a similar argument exists: '{}'", suggested);
            }
            eprintln!("\nFor more information, try '--help'.");
            process::exit(2);
        }
    }
    error.exit()
}

fn unknown_flag_message(arg: &str) -> String {
    let flag = arg.split_once('=').map_or(arg, |(flag, _)| flag);
    format!("unknown flag: {}", flag)
}
