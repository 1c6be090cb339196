//! # Add Command Implementation
//!
//! This module implements the `add` subcommand, which registers a repository
//! in the four-key config file.
//!
//! ## Functionality
//!
//! - **Derived Name**: The repository is registered under the last path
//!   segment of its clone address (`.../four-key.git` becomes `four-key`)
//! - **Multiple Fix Patterns**: `--fixCommitPatterns` may be repeated via `-f`
//!   or given as a comma-separated list
//! - **Late Validation**: Every flag is optional at parse time so that missing
//!   values are reported by the registry with a specific message
//!
//! A rejected repository is reported on stdout and the command still exits 0.

use anyhow::Result;
use clap::Args;

use four_key::output::OutputConfig;
use four_key::registry::RepositoryRegistry;
use four_key::store::ConfigStore;
use four_key::suggestions;

/// Add a repository to the config file
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Address to clone the repository from (e.g., https://github.com/org/repo.git)
    #[arg(long = "cloneAddress", value_name = "URL", default_value = "")]
    pub clone_address: String,

    /// Team that owns the repository
    #[arg(long = "team", value_name = "NAME", default_value = "")]
    pub team: String,

    /// Pattern identifying release tags (e.g., release-v)
    #[arg(long = "releaseTagPattern", value_name = "PATTERN", default_value = "")]
    pub release_tag_pattern: String,

    /// Pattern identifying fix or hotfix commits (repeatable)
    #[arg(
        short = 'f',
        long = "fixCommitPatterns",
        value_name = "PATTERN",
        value_delimiter = ','
    )]
    pub fix_commit_patterns: Vec<String>,
}

/// Execute the `add` command.
///
/// Validates the arguments, registers the repository, and reports the name it
/// was registered under.
pub fn execute<S: ConfigStore>(
    args: AddArgs,
    registry: &RepositoryRegistry<S>,
    output: &OutputConfig,
) -> Result<()> {
    let added = registry.add(
        &args.clone_address,
        &args.team,
        &args.release_tag_pattern,
        &args.fix_commit_patterns,
    );

    match added {
        Ok(record) => {
            println!(
                "{} {}: successfully added your repository to config file",
                output.success_marker(),
                output.highlight(record.name())
            );
            Ok(())
        }
        Err(error) => super::report(error, |e| suggestions::explain(e, &[])),
    }
}
