//! # Config Storage
//!
//! This module provides the persistence seam for the repository registry.
//! The [`ConfigStore`] trait reads and writes the whole [`Registry`] as one
//! unit, which keeps the registry logic independent of where the data
//! lives.
//!
//! ## Implementations
//!
//! - **[`FileConfigStore`]**: Keeps the registry in a YAML file. Saves are
//!   atomic: the document is written to a temporary file in the same
//!   directory, synced, and renamed over the original, so readers see either
//!   the old or the new registry and never a truncated one.
//!
//! - **[`MemoryConfigStore`]**: Keeps the registry in memory. It is used in
//!   tests and can be told to fail every save to simulate a broken disk.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::registry::Registry;

/// Trait for registry persistence - allows in-memory substitutes in tests
pub trait ConfigStore: Send + Sync {
    /// Load the full registry.
    ///
    /// A store that has never been written returns an empty registry.
    fn load(&self) -> Result<Registry>;

    /// Replace the stored registry with `registry`.
    ///
    /// Implementations must leave the previous registry in place if the save
    /// fails.
    fn save(&self, registry: &Registry) -> Result<()>;
}

impl<T: ConfigStore + ?Sized> ConfigStore for &T {
    fn load(&self) -> Result<Registry> {
        (**self).load()
    }

    fn save(&self, registry: &Registry) -> Result<()> {
        (**self).save(registry)
    }
}

/// Registry persisted as a YAML document on the host filesystem.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Create a store for the config file at `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the config file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a registry document read from this store's file.
    fn parse(&self, content: &str) -> Result<Registry> {
        if content.trim().is_empty() {
            warn!(
                "Config file {} is empty, treating it as an empty registry",
                self.path.display()
            );
            return Ok(Registry::new());
        }

        serde_yaml::from_str(content).map_err(|e| Error::CorruptConfig {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn persistence_error(&self, operation: &'static str) -> impl FnOnce(io::Error) -> Error + '_ {
        move |source| Error::Persistence {
            path: self.path.clone(),
            operation,
            source,
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Registry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "Config file {} does not exist yet, starting with an empty registry",
                    self.path.display()
                );
                return Ok(Registry::new());
            }
            Err(e) => return Err(self.persistence_error("read")(e)),
        };

        self.parse(&content)
    }

    fn save(&self, registry: &Registry) -> Result<()> {
        let document = serde_yaml::to_string(registry).map_err(|e| {
            self.persistence_error("serialize")(io::Error::new(io::ErrorKind::InvalidData, e))
        })?;

        // The temporary file must share a filesystem with the target for the
        // rename to be atomic.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(self.persistence_error("write"))?;

        let mut temp = NamedTempFile::new_in(dir).map_err(self.persistence_error("write"))?;
        temp.write_all(document.as_bytes())
            .map_err(self.persistence_error("write"))?;
        // Temporary files are created owner-only; keep the existing file's mode.
        if let Ok(metadata) = fs::metadata(&self.path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(self.persistence_error("write"))?;
        }
        temp.as_file()
            .sync_all()
            .map_err(self.persistence_error("write"))?;
        temp.persist(&self.path)
            .map_err(|e| self.persistence_error("write")(e.error))?;

        debug!(
            "Saved {} repositories to {}",
            registry.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Registry kept in memory.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    registry: Mutex<Registry>,
    saves: Mutex<usize>,
    fail_saves: bool,
}

impl MemoryConfigStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `registry`
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: Mutex::new(registry),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with a persistence error
    pub fn with_save_failure(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<Registry> {
        Ok(self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, registry: &Registry) -> Result<()> {
        if self.fail_saves {
            return Err(Error::Persistence {
                path: PathBuf::from("<memory>"),
                operation: "write",
                source: io::Error::new(io::ErrorKind::StorageFull, "simulated save failure"),
            });
        }

        *self.registry.lock().unwrap_or_else(PoisonError::into_inner) = registry.clone();
        *self.saves.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}
