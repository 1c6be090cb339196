//! # four-key Repository Registry
//!
//! This library keeps the registry of source repositories that the four-key
//! metrics pipeline analyzes. It is used by the `four-key` command-line tool,
//! and the pipeline itself can read the same registry through it.
//!
//! ## Quick Example
//!
//! ```
//! use four_key::registry::RepositoryRegistry;
//! use four_key::store::MemoryConfigStore;
//!
//! let registry = RepositoryRegistry::new(MemoryConfigStore::new());
//!
//! let record = registry
//!     .add(
//!         "https://github.com/Trendyol/four-key.git",
//!         "trendyol-team",
//!         "release-v",
//!         ["fix", "hotfix"],
//!     )
//!     .unwrap();
//! assert_eq!(record.name(), "four-key");
//!
//! assert_eq!(registry.list().unwrap().len(), 1);
//! registry.remove("four-key").unwrap();
//! assert!(registry.remove("four-key").is_err());
//! ```
//!
//! ## Core Concepts
//!
//! - **Records (`record`)**: One tracked repository. Built only through
//!   validation, with its name derived from the clone address.
//! - **Registry (`registry`)**: The ordered collection of records and the
//!   `RepositoryRegistry` service implementing add, remove and list.
//! - **Storage (`store`)**: The `ConfigStore` trait, with an atomic YAML file
//!   implementation and an in-memory one for tests.
//! - **Errors (`error`, `suggestions`)**: A typed error for every failure,
//!   and helpers that add hints for the CLI.
//!
//! ## Execution Flow
//!
//! Each operation is a single load-decide-save cycle:
//!
//! 1.  **Validate**: Build the record from raw input (add only).
//! 2.  **Load**: Read the full registry from the store.
//! 3.  **Decide**: Apply the uniqueness or existence rule.
//! 4.  **Save**: Atomically rewrite the full registry (mutations only).

pub mod defaults;
pub mod error;
pub mod output;
pub mod record;
pub mod registry;
pub mod store;
pub mod suggestions;

#[cfg(test)]
mod record_proptest;
