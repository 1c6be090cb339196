//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures and helper functions to reduce duplication
//! across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_registry(registries::FOUR_KEY);
//!     fixture.command().arg("list").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::registries;
    #[allow(unused_imports)]
    pub use super::FOUR_KEY_ADDRESS;
    pub use super::TestFixture;
}

/// Clone address used throughout the CLI scenarios.
#[allow(dead_code)]
pub const FOUR_KEY_ADDRESS: &str = "https://github.com/Trendyol/four-key.git";

/// Registry documents for seeding the config file.
#[allow(dead_code)]
pub mod registries {
    /// Registry holding only the four-key repository.
    pub const FOUR_KEY: &str = r#"four-key:
  cloneAddress: https://github.com/Trendyol/four-key.git
  team: trendyol-team
  releaseTagPattern: release-v
  fixCommitPatterns:
  - fix
  - hotfix
"#;

    /// Registry holding two repositories.
    pub const TWO_REPOSITORIES: &str = r#"four-key:
  cloneAddress: https://github.com/Trendyol/four-key.git
  team: trendyol-team
  releaseTagPattern: release-v
  fixCommitPatterns:
  - fix
  - hotfix
api:
  cloneAddress: git@gitlab.com:platform/api.git
  team: platform
  releaseTagPattern: v
  fixCommitPatterns:
  - bug
"#;

    /// A document that is not valid YAML.
    pub const INVALID_YAML: &str = "four-key: [unclosed";
}

/// A temporary directory holding an isolated registry file.
///
/// Commands created through the fixture always pass `--config`, so tests
/// never read or write the real user config.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with no registry file.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Seed the registry file with the given content.
    #[allow(dead_code)]
    pub fn with_registry(self, content: &str) -> Self {
        self.temp_dir
            .child("repositories.yaml")
            .write_str(content)
            .expect("Failed to write registry file");
        self
    }

    /// Get the path to the temporary directory.
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the registry file.
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("repositories.yaml")
    }

    /// Read the registry file back.
    #[allow(dead_code)]
    pub fn registry_content(&self) -> String {
        std::fs::read_to_string(self.config_path()).expect("Failed to read registry file")
    }

    /// Create a command bound to this fixture's registry file.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("four-key");
        cmd.current_dir(self.path())
            .env_remove("FOUR_KEY_CONFIG")
            .env("NO_COLOR", "1")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    /// Run `add` for the four-key repository and assert it succeeded.
    #[allow(dead_code)]
    pub fn add_four_key(&self) {
        self.command()
            .args([
                "add",
                "--cloneAddress",
                FOUR_KEY_ADDRESS,
                "--team",
                "trendyol-team",
                "--releaseTagPattern",
                "release-v",
                "--fixCommitPatterns",
                "fix",
                "-f",
                "hotfix",
            ])
            .assert()
            .success();
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
