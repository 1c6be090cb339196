//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `four-key`
//! command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args`, the repository
//!   registry and the output configuration, and performs the command's logic.
//!
//! Registry commands are generic over the `ConfigStore`, so their tests run
//! against an in-memory store. Rejected requests go through [`report`].

pub mod add;
pub mod list;
pub mod remove;

use anyhow::Result;
use four_key::error::Error;

/// Report a registry failure at the command boundary.
///
/// Rejected requests (validation and business-rule errors) are printed on
/// stdout and the command exits 0. Storage failures are returned so the
/// process exits non-zero with the message on stderr.
pub(crate) fn report(error: Error, explain: impl FnOnce(Error) -> anyhow::Error) -> Result<()> {
    if !error.is_user_error() {
        return Err(explain(error));
    }
    println!("Error: {}", explain(error));
    Ok(())
}
