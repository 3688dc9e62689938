//! Persistence for the shortcut registry.
//!
//! The registry never touches the filesystem itself. [`ShortcutStore`] pairs a
//! path with a [`Store`] backend, loads a validated registry from it and
//! writes the registry back only when it changed.

pub mod codec;

use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, ShortkeysError};
use crate::registry::Registry;

/// Raw byte access to the backing resource.
pub trait Store {
    fn exists(&self, path: &Path) -> bool;
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write_all(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Local filesystem backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl Store for FsStore {
    /// Only "not found" counts as missing; any other stat failure is left
    /// for `read_all` to report.
    fn exists(&self, path: &Path) -> bool {
        !matches!(std::fs::metadata(path), Err(e) if e.kind() == io::ErrorKind::NotFound)
    }

    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    /// Write through a sibling temp file and rename it into place, so the
    /// key file is never left half written.
    fn write_all(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, bytes)?;
        std::fs::rename(&temp_path, path)
    }
}

/// Result of [`ShortcutStore::persist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    Written,
    Skipped,
}

/// A key file at a fixed path.
#[derive(Debug, Clone)]
pub struct ShortcutStore<S = FsStore> {
    store: S,
    path: PathBuf,
}

impl ShortcutStore<FsStore> {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_store(FsStore, path)
    }
}

impl<S: Store> ShortcutStore<S> {
    pub fn with_store(store: S, path: impl Into<PathBuf>) -> Self {
        ShortcutStore {
            store,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the registry, or an empty one if the file does not exist yet.
    ///
    /// Unreadable, unparsable or inconsistent files are errors; there is no
    /// partial load.
    pub fn load(&self) -> Result<Registry> {
        info!(path = %self.path.display(), "opening file for reading key mappings");
        if !self.store.exists(&self.path) {
            info!(
                path = %self.path.display(),
                "file doesn't exist, creating empty shortcuts"
            );
            return Ok(Registry::new());
        }

        let bytes = self
            .store
            .read_all(&self.path)
            .map_err(|source| ShortkeysError::Storage {
                operation: "read",
                path: self.path.clone(),
                source,
            })?;
        let file = codec::parse_key_file(&bytes).map_err(|source| ShortkeysError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let registry = Registry::from_entries(codec::into_entries(file)?)?;
        info!(entries = registry.len(), "loaded key mappings");
        Ok(registry)
    }

    /// Write the registry out if it has unsaved changes.
    pub fn persist(&self, registry: &mut Registry) -> Result<PersistOutcome> {
        if !registry.is_dirty() {
            info!(path = %self.path.display(), "no shortcut changes, skipping write");
            return Ok(PersistOutcome::Skipped);
        }

        let content = codec::serialize_entries(registry.entries())?;
        self.store
            .write_all(&self.path, content.as_bytes())
            .map_err(|source| ShortkeysError::Storage {
                operation: "write",
                path: self.path.clone(),
                source,
            })?;
        registry.mark_clean();
        info!(
            path = %self.path.display(),
            entries = registry.len(),
            "wrote key mappings"
        );
        Ok(PersistOutcome::Written)
    }
}
