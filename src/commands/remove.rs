//! # Remove Command Implementation
//!
//! This module implements the `remove` subcommand, which unregisters a
//! repository by its derived name.
//!
//! Removing a name that is not registered is reported on stdout instead of
//! silently succeeding. The message suggests the closest registered name when
//! there is one.

use anyhow::Result;
use clap::Args;

use four_key::error::Error;
use four_key::output::OutputConfig;
use four_key::registry::RepositoryRegistry;
use four_key::store::ConfigStore;
use four_key::suggestions;

/// Remove a repository from the config file
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Name of the repository to remove (as shown by `four-key list`)
    #[arg(short = 'r', long = "repository", value_name = "NAME", default_value = "")]
    pub repository: String,
}

/// Execute the `remove` command.
pub fn execute<S: ConfigStore>(
    args: RemoveArgs,
    registry: &RepositoryRegistry<S>,
    output: &OutputConfig,
) -> Result<()> {
    let name = args.repository.trim();

    match registry.remove(name) {
        Ok(removed) => {
            println!(
                "{} successfully removed {} repository from the config file",
                output.success_marker(),
                output.highlight(removed.name())
            );
            Ok(())
        }
        Err(error) => super::report(error, |e| explain_with_candidates(e, registry)),
    }
}

/// Attach hints, offering registered names for "did you mean".
pub(crate) fn explain_with_candidates<S: ConfigStore>(
    error: Error,
    registry: &RepositoryRegistry<S>,
) -> anyhow::Error {
    let registered = match &error {
        Error::RepositoryNotFound { .. } => registry.list().unwrap_or_default(),
        _ => Vec::new(),
    };
    let names: Vec<&str> = registered.iter().map(|record| record.name()).collect();
    suggestions::explain(error, &names)
}
