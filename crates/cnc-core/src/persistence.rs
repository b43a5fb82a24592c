//! Persistence adapters
//!
//! The store does not know where its bytes live. It hands the encoded
//! collection to a [`PersistenceAdapter`], which behaves like a single slot
//! of a key-value store: `load` returns the last saved payload (if any) and
//! `save` replaces it.

use cnc_fs::{NormalizedPath, io};

use crate::error::{Error, Result};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "cncTools";

/// A byte-level slot the store persists its collection into
pub trait PersistenceAdapter {
    /// Return the stored payload, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the stored payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteFailed`] if the payload could not be stored.
    fn save(&mut self, bytes: &[u8]) -> Result<()>;
}

impl<A: PersistenceAdapter + ?Sized> PersistenceAdapter for Box<A> {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        (**self).load()
    }

    fn save(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).save(bytes)
    }
}

/// Stores the payload as `<dir>/<key>.json`
///
/// Writes go through [`cnc_fs::io::write_atomic`], so a crash mid-write
/// leaves the previous payload intact.
#[derive(Debug, Clone)]
pub struct FileAdapter {
    path: NormalizedPath,
}

impl FileAdapter {
    /// Adapter for `key` inside `dir`.
    pub fn new(dir: &NormalizedPath, key: &str) -> Self {
        Self {
            path: dir.join(&format!("{key}.json")),
        }
    }

    /// Adapter for an explicit file path.
    pub fn at(path: impl Into<NormalizedPath>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }
}

impl PersistenceAdapter for FileAdapter {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        let payload = io::read_optional(&self.path)?;
        tracing::debug!(path = %self.path, found = payload.is_some(), "loaded tool payload");
        Ok(payload)
    }

    fn save(&mut self, bytes: &[u8]) -> Result<()> {
        io::write_atomic(&self.path, bytes).map_err(|e| Error::WriteFailed {
            message: e.to_string(),
        })
    }
}

/// Keeps the payload in memory
///
/// Useful for embedding the store without touching disk, and for tests:
/// [`MemoryAdapter::fail_writes`] makes every save fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryAdapter {
    payload: Option<Vec<u8>>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryAdapter {
    /// Empty adapter; the first load returns `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapter that already holds `payload`.
    pub fn with_payload(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: Some(payload.into()),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The last successfully saved payload.
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    /// Number of successful saves.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn load(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.payload.clone())
    }

    fn save(&mut self, bytes: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(Error::WriteFailed {
                message: "storage is read-only".to_string(),
            });
        }
        self.payload = Some(bytes.to_vec());
        self.writes += 1;
        Ok(())
    }
}
