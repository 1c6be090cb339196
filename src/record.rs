//! # Repository Records
//!
//! A [`RepositoryRecord`] is one tracked repository: where to clone it from,
//! which team owns it, and the patterns the metrics pipeline uses to spot
//! release tags and fix commits.
//!
//! Records are only built through [`RepositoryRecord::new`], which validates
//! the raw input and derives the record's `name` from its clone address. The
//! fields are private so a record cannot be changed after construction.
//!
//! ## Validation
//!
//! Fields are checked in a fixed order and the first failure is reported:
//!
//! 1. clone address
//! 2. team
//! 3. release tag pattern
//! 4. fix commit patterns (after blank entries are dropped)
//!
//! Surrounding whitespace is trimmed, so a whitespace-only value counts as
//! missing.

use percent_encoding::percent_decode_str;
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

/// Suffix stripped from the last path segment when deriving a name.
const VCS_SUFFIX: &str = ".git";

/// One repository tracked by the metrics pipeline.
///
/// Records serialize for display but cannot be deserialized directly; the
/// registry file is read back through validation.
///
/// ```compile_fail
/// let record: four_key::record::RepositoryRecord =
///     serde_json::from_str(r#"{"name":"x","cloneAddress":"","team":"","releaseTagPattern":"","fixCommitPatterns":[]}"#)
///         .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    name: String,
    clone_address: String,
    team: String,
    release_tag_pattern: String,
    fix_commit_patterns: Vec<String>,
}

impl RepositoryRecord {
    /// Validate user input and build a record with a derived name.
    ///
    /// # Errors
    ///
    /// Returns the first failing check in validation order. If every field is
    /// present but no name can be derived from `clone_address`, returns
    /// [`Error::InvalidCloneAddress`].
    pub fn new<I, S>(
        clone_address: &str,
        team: &str,
        release_tag_pattern: &str,
        fix_commit_patterns: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = Fields::validate(
            clone_address,
            team,
            release_tag_pattern,
            fix_commit_patterns,
        )?;

        let name = derive_name(&fields.clone_address).ok_or_else(|| Error::InvalidCloneAddress {
            clone_address: fields.clone_address.clone(),
        })?;

        Ok(fields.into_record(name))
    }

    /// Rebuild a record read back from storage under its stored key.
    ///
    /// The stored key is trusted as the name once the registry has rejected
    /// blank keys. The remaining fields go through the same checks as
    /// [`RepositoryRecord::new`].
    pub(crate) fn restore<I, S>(
        name: &str,
        clone_address: &str,
        team: &str,
        release_tag_pattern: &str,
        fix_commit_patterns: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields = Fields::validate(
            clone_address,
            team,
            release_tag_pattern,
            fix_commit_patterns,
        )?;
        Ok(fields.into_record(name.to_string()))
    }

    /// The derived name, unique within a registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remote location the pipeline clones history from.
    pub fn clone_address(&self) -> &str {
        &self.clone_address
    }

    /// Owning team label.
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Pattern recognizing release tags.
    pub fn release_tag_pattern(&self) -> &str {
        &self.release_tag_pattern
    }

    /// Patterns recognizing fix and hotfix commits, in insertion order.
    pub fn fix_commit_patterns(&self) -> &[String] {
        &self.fix_commit_patterns
    }
}

/// Trimmed, validated field values awaiting a name.
struct Fields {
    clone_address: String,
    team: String,
    release_tag_pattern: String,
    fix_commit_patterns: Vec<String>,
}

impl Fields {
    fn validate<I, S>(
        clone_address: &str,
        team: &str,
        release_tag_pattern: &str,
        fix_commit_patterns: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let clone_address = required(clone_address).ok_or(Error::MissingCloneAddress)?;
        let team = required(team).ok_or(Error::MissingTeam)?;
        let release_tag_pattern =
            required(release_tag_pattern).ok_or(Error::MissingReleaseTagPattern)?;

        let fix_commit_patterns: Vec<String> = fix_commit_patterns
            .into_iter()
            .filter_map(|pattern| required(pattern.as_ref()))
            .collect();
        if fix_commit_patterns.is_empty() {
            return Err(Error::MissingFixCommitPatterns);
        }

        Ok(Self {
            clone_address,
            team,
            release_tag_pattern,
            fix_commit_patterns,
        })
    }

    fn into_record(self, name: String) -> RepositoryRecord {
        RepositoryRecord {
            name,
            clone_address: self.clone_address,
            team: self.team,
            release_tag_pattern: self.release_tag_pattern,
            fix_commit_patterns: self.fix_commit_patterns,
        }
    }
}

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Derive a repository name from a clone address.
///
/// The name is the last path segment with any `.git` suffix removed:
///
/// - `https://github.com/Trendyol/four-key.git` → `four-key`
/// - `git@github.com:Trendyol/four-key.git` → `four-key`
/// - `/srv/git/four-key/` → `four-key`
///
/// Query strings and fragments of URL-shaped addresses are ignored, and their
/// paths are percent-decoded so `https://host/org/My%20Repo` and
/// `git@host:org/My Repo` derive the same name. Returns `None` when nothing
/// usable is left, e.g. for `/` or `.git`.
pub fn derive_name(clone_address: &str) -> Option<String> {
    let address = clone_address.trim();

    // Single-letter schemes are Windows drive letters, not URLs.
    let path = match Url::parse(address) {
        Ok(url) if url.scheme().len() > 1 => percent_decode_str(url.path())
            .decode_utf8_lossy()
            .into_owned(),
        _ => address.to_string(),
    };

    let segment = path
        .split(['/', '\\', ':'])
        .map(str::trim)
        .rfind(|segment| !segment.is_empty())?;

    let name = segment.strip_suffix(VCS_SUFFIX).unwrap_or(segment);
    match name {
        "" | "." | ".." => None,
        _ => Some(name.to_string()),
    }
}
