//! # Storage Backends
//!
//! Key/value persistence behind the compliance store. The backend is a
//! narrow trait so the store can run against the real filesystem, a test
//! double, or whatever key/value surface a host application provides.
//!
//! Backends report failures as [`StorageError`] — the *store* owns the
//! policy of what to do about them (fall back to defaults on read, log and
//! continue on write). Backends never decide to swallow anything.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The namespaced key the compliance record is persisted under.
///
/// The `v1` suffix is the record schema version. An incompatible change to
/// the record shape must bump the suffix rather than mutate the shape in
/// place — old records under the old key are then simply never read, which
/// hydrates as the gated defaults.
pub const STORAGE_KEY: &str = "nirvana:compliance:v1";

/// Error raised by a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem-level failure.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend cannot currently accept reads or writes.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The record could not be serialized for persistence.
    #[error("storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// A key/value persistence surface.
pub trait StorageBackend {
    /// Read the value under `key`. `Ok(None)` means no record exists.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing an absent key succeeds.
    fn clear(&mut self, key: &str) -> Result<(), StorageError>;
}

// ─── File backend ───────────────────────────────────────────────────

/// Stores each key as a JSON document in a directory.
///
/// Key characters outside `[A-Za-z0-9._-]` are mapped to `-` to produce a
/// portable file name, so `nirvana:compliance:v1` lands in
/// `nirvana-compliance-v1.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`. The directory is created lazily
    /// on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this backend writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ─── Memory backend ─────────────────────────────────────────────────

/// In-memory backend for tests and ephemeral sessions.
///
/// Can be poisoned to simulate an unavailable storage surface (quota
/// exhaustion, private browsing, a read-only volume): while poisoned,
/// every operation fails with [`StorageError::Unavailable`] and the held
/// records are untouched.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    records: HashMap<String, String>,
    poisoned: bool,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with a single record.
    pub fn with_record(key: &str, value: &str) -> Self {
        let mut records = HashMap::new();
        records.insert(key.to_string(), value.to_string());
        Self {
            records,
            poisoned: false,
        }
    }

    /// Make every subsequent operation fail.
    pub fn poison(&mut self) {
        self.poisoned = true;
    }

    /// Restore normal operation.
    pub fn heal(&mut self) {
        self.poisoned = false;
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.poisoned {
            Err(StorageError::Unavailable("backend poisoned".into()))
        } else {
            Ok(())
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.records.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.records.remove(key);
        Ok(())
    }
}
