//! # List Command Implementation
//!
//! This module implements the `list` subcommand, which shows the repositories
//! registered in the four-key config file.
//!
//! ## Functionality
//!
//! - **Summary**: Reports how many repositories were found, then one line per
//!   repository with its name and clone address
//! - **Detailed Output**: `--long` adds the team and the tag and commit patterns
//! - **Single Repository**: `--repository <NAME>` shows one entry in detail
//! - **Machine-readable Output**: `--json` prints the records as a JSON array
//!
//! An empty registry is not an error; it reports zero repositories found.
//! This command never modifies the config file.

use anyhow::Result;
use clap::Args;

use four_key::output::OutputConfig;
use four_key::record::RepositoryRecord;
use four_key::registry::RepositoryRegistry;
use four_key::store::ConfigStore;

use super::remove::explain_with_candidates;

/// List the repositories in the config file
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show team, release tag pattern and fix commit patterns.
    #[arg(short, long)]
    pub long: bool,

    /// Print the repositories as JSON.
    #[arg(long, conflicts_with_all = ["long", "count"])]
    pub json: bool,

    /// Show only the number of repositories.
    #[arg(long)]
    pub count: bool,

    /// Show a single repository by name.
    #[arg(short = 'r', long = "repository", value_name = "NAME")]
    pub repository: Option<String>,
}

/// Execute the `list` command.
pub fn execute<S: ConfigStore>(
    args: ListArgs,
    registry: &RepositoryRegistry<S>,
    output: &OutputConfig,
) -> Result<()> {
    let records = match &args.repository {
        Some(name) => match registry.get(name.trim()) {
            Ok(record) => vec![record],
            Err(error) => {
                return super::report(error, |e| explain_with_candidates(e, registry))
            }
        },
        None => registry
            .list()
            .map_err(|e| four_key::suggestions::explain(e, &[]))?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if args.count {
        println!("{}", records.len());
        return Ok(());
    }

    println!("{} {}", output.list_marker(), found_summary(records.len()));
    if records.is_empty() {
        return Ok(());
    }

    println!();
    let long = args.long || args.repository.is_some();
    print!("{}", render_records(&records, long, output));
    Ok(())
}

/// Count phrase printed above the listing.
fn found_summary(count: usize) -> String {
    let noun = if count == 1 { "repository" } else { "repositories" };
    format!("{} {} has been found", count, noun)
}

fn render_records(records: &[RepositoryRecord], long: bool, output: &OutputConfig) -> String {
    let mut rendered = String::new();

    if !long {
        let width = records
            .iter()
            .map(|record| record.name().chars().count())
            .max()
            .unwrap_or(0);
        for record in records {
            let padding = " ".repeat(width - record.name().chars().count());
            rendered.push_str(&format!(
                "  {}{}  {}\n",
                output.highlight(record.name()),
                padding,
                record.clone_address()
            ));
        }
        return rendered;
    }

    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            rendered.push('\n');
        }
        rendered.push_str(&format!("{}\n", output.highlight(record.name())));
        rendered.push_str(&format!("  clone address:       {}\n", record.clone_address()));
        rendered.push_str(&format!("  team:                {}\n", record.team()));
        rendered.push_str(&format!(
            "  release tag pattern: {}\n",
            record.release_tag_pattern()
        ));
        rendered.push_str(&format!(
            "  fix commit patterns: {}\n",
            record.fix_commit_patterns().join(", ")
        ));
    }
    rendered
}
