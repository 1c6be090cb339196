//! # Repository Registry
//!
//! This module holds the [`Registry`] collection and the
//! [`RepositoryRegistry`] service that runs the `add`, `remove` and `list`
//! operations against a [`ConfigStore`].
//!
//! ## Operation Model
//!
//! Every operation loads a fresh snapshot from the store, decides, and (for
//! mutations) saves the whole registry back. Nothing is cached between
//! calls, so two operations never observe each other's in-memory state.
//!
//! There is no cross-process lock. Two invocations that mutate the same
//! config file at the same time race, and the last save wins. The store's
//! atomic rewrite only guarantees that readers never see a torn file.
//!
//! ## Persisted Shape
//!
//! A [`Registry`] serializes as a mapping keyed by repository name:
//!
//! ```yaml
//! four-key:
//!   cloneAddress: https://github.com/Trendyol/four-key.git
//!   team: trendyol-team
//!   releaseTagPattern: release-v
//!   fixCommitPatterns:
//!   - fix
//!   - hotfix
//! ```
//!
//! Entry order is preserved in both directions.

use std::fmt;

use log::{debug, info};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::record::RepositoryRecord;
use crate::store::ConfigStore;

/// The full, ordered collection of tracked repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    records: Vec<RepositoryRecord>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered repositories
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no repository is registered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by name
    pub fn get(&self, name: &str) -> Option<&RepositoryRecord> {
        self.records.iter().find(|record| record.name() == name)
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate records in stored order
    pub fn iter(&self) -> impl Iterator<Item = &RepositoryRecord> {
        self.records.iter()
    }

    /// Registered names in stored order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(RepositoryRecord::name)
    }

    /// Append a record, rejecting a name that is already present.
    pub fn insert(&mut self, record: RepositoryRecord) -> Result<()> {
        if self.contains(record.name()) {
            return Err(Error::DuplicateRepository {
                name: record.name().to_string(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove a record by name, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Result<RepositoryRecord> {
        let index = self
            .records
            .iter()
            .position(|record| record.name() == name)
            .ok_or_else(|| Error::RepositoryNotFound {
                name: name.to_string(),
            })?;
        Ok(self.records.remove(index))
    }

    /// Consume the registry, returning its records in stored order
    pub fn into_records(self) -> Vec<RepositoryRecord> {
        self.records
    }
}

/// Stored value for one registry key; the name lives in the key.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryRef<'a> {
    clone_address: &'a str,
    team: &'a str,
    release_tag_pattern: &'a str,
    fix_commit_patterns: &'a [String],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Entry {
    clone_address: String,
    team: String,
    release_tag_pattern: String,
    #[serde(default)]
    fix_commit_patterns: Vec<String>,
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(
                record.name(),
                &EntryRef {
                    clone_address: record.clone_address(),
                    team: record.team(),
                    release_tag_pattern: record.release_tag_pattern(),
                    fix_commit_patterns: record.fix_commit_patterns(),
                },
            )?;
        }
        map.end()
    }
}

struct RegistryVisitor;

impl<'de> Visitor<'de> for RegistryVisitor {
    type Value = Registry;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a mapping of repository names to repository settings")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Registry, E> {
        Ok(Registry::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Registry, A::Error> {
        let mut registry = Registry::new();
        while let Some((name, entry)) = access.next_entry::<String, Entry>()? {
            if name.trim().is_empty() {
                return Err(de::Error::custom("repository with an empty name"));
            }
            let record = RepositoryRecord::restore(
                &name,
                &entry.clone_address,
                &entry.team,
                &entry.release_tag_pattern,
                &entry.fix_commit_patterns,
            )
            .map_err(|e| de::Error::custom(format!("repository '{}': {}", name, e)))?;
            registry.insert(record).map_err(de::Error::custom)?;
        }
        Ok(registry)
    }
}

impl<'de> Deserialize<'de> for Registry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(RegistryVisitor)
    }
}

/// Validated add, remove and list over a [`ConfigStore`].
#[derive(Debug)]
pub struct RepositoryRegistry<S> {
    store: S,
}

impl<S: ConfigStore> RepositoryRegistry<S> {
    /// Create a registry service backed by `store`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new repository.
    ///
    /// Validates the input, derives the name, rejects duplicates, and saves
    /// the extended registry. Returns the stored record.
    ///
    /// # Errors
    ///
    /// Validation errors are returned before the store is touched.
    /// [`Error::DuplicateRepository`] leaves the stored registry unchanged.
    pub fn add<I, T>(
        &self,
        clone_address: &str,
        team: &str,
        release_tag_pattern: &str,
        fix_commit_patterns: I,
    ) -> Result<RepositoryRecord>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let record =
            RepositoryRecord::new(clone_address, team, release_tag_pattern, fix_commit_patterns)?;

        let mut registry = self.load()?;
        registry.insert(record.clone())?;
        self.store.save(&registry)?;

        info!(
            "Added repository {} ({}) for team {}",
            record.name(),
            record.clone_address(),
            record.team()
        );
        Ok(record)
    }

    /// Unregister a repository by name and return the removed record.
    ///
    /// Removing an unknown name is an error, including a second removal of
    /// the same name.
    pub fn remove(&self, name: &str) -> Result<RepositoryRecord> {
        let mut registry = self.load()?;
        let removed = registry.remove(name)?;
        self.store.save(&registry)?;

        info!("Removed repository {}", removed.name());
        Ok(removed)
    }

    /// All registered repositories in stored order. Empty is not an error.
    pub fn list(&self) -> Result<Vec<RepositoryRecord>> {
        Ok(self.load()?.into_records())
    }

    /// A single registered repository.
    pub fn get(&self, name: &str) -> Result<RepositoryRecord> {
        self.load()?
            .get(name)
            .cloned()
            .ok_or_else(|| Error::RepositoryNotFound {
                name: name.to_string(),
            })
    }

    fn load(&self) -> Result<Registry> {
        let registry = self.store.load()?;
        debug!("Loaded {} registered repositories", registry.len());
        Ok(registry)
    }
}
