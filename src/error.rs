//! # Error Handling
//!
//! This module defines the centralized error type for the `four-key`
//! repository registry. It uses `thiserror` to build an `Error` enum whose
//! variants name every failure the registry can report, each carrying the
//! offending value so the CLI can print a precise message.
//!
//! ## Key Components
//!
//! - **`Error`**: Every failure the library can surface. Variants fall into
//!   three groups:
//!   - Validation errors raised while building a record from user input
//!     (`MissingCloneAddress`, `MissingTeam`, `MissingReleaseTagPattern`,
//!     `MissingFixCommitPatterns`, `InvalidCloneAddress`).
//!   - Registry rule violations (`DuplicateRepository`,
//!     `RepositoryNotFound`).
//!   - Storage faults (`CorruptConfig`, `Persistence`).
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Nothing in the library retries or swallows an error; each one is handed
//! back to the caller unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for registry operations
#[derive(Error, Debug)]
pub enum Error {
    /// The clone address was empty.
    #[error("You must specify a repository to clone")]
    MissingCloneAddress,

    /// The owning team was empty.
    #[error("You must specify a team that owns the repository")]
    MissingTeam,

    /// The release tag pattern was empty.
    #[error("You must specify a release tag pattern")]
    MissingReleaseTagPattern,

    /// No usable fix commit pattern was given.
    #[error("You must specify at least one fix commit pattern")]
    MissingFixCommitPatterns,

    /// A repository name could not be derived from the clone address.
    #[error("Cannot derive a repository name from clone address '{clone_address}'")]
    InvalidCloneAddress { clone_address: String },

    /// A repository with the same derived name is already registered.
    #[error("The {name} repository already exists!")]
    DuplicateRepository { name: String },

    /// No repository with the given name is registered.
    #[error("The {name} repository does not exist!")]
    RepositoryNotFound { name: String },

    /// The config file exists but does not hold a valid registry.
    #[error("Config file {} is corrupt: {message}", path.display())]
    CorruptConfig { path: PathBuf, message: String },

    /// Reading or writing the config file failed.
    #[error("Failed to {operation} config file {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether the user can fix this by re-running with different arguments.
    ///
    /// Storage faults need the environment fixed instead.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Error::CorruptConfig { .. } | Error::Persistence { .. }
        )
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
