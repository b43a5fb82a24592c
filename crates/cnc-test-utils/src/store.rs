//! [`TestStore`] for store-level test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use cnc_core::{
    FileAdapter, LoadOutcome, MemoryAdapter, StoreOptions, ToolFields, ToolRecord, ToolStore,
};
use cnc_fs::NormalizedPath;
use tempfile::TempDir;

/// Open an in-memory store that starts with no records.
pub fn empty_memory_store() -> ToolStore<MemoryAdapter> {
    let (store, outcome) = ToolStore::open(MemoryAdapter::with_payload("[]"), &StoreOptions::default());
    assert!(matches!(outcome, LoadOutcome::Restored { count: 0 }));
    store
}

/// Create every field set in order and return the created records.
///
/// # Panics
/// Panics if any create fails validation.
pub fn create_all<A: cnc_core::PersistenceAdapter>(
    store: &mut ToolStore<A>,
    fields: impl IntoIterator<Item = ToolFields>,
) -> Vec<ToolRecord> {
    fields
        .into_iter()
        .map(|f| store.create(f).expect("fixture fields must be valid").into_inner())
        .collect()
}

/// A temporary data directory for file-backed stores.
///
/// # Example
///
/// ```rust,no_run
/// use cnc_test_utils::TestStore;
///
/// let dir = TestStore::new();
/// let (store, _) = dir.open();
/// assert_eq!(store.len(), 3);
/// dir.assert_payload_contains("Haas VF-2");
/// ```
pub struct TestStore {
    temp_dir: TempDir,
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStore {
    /// Create an empty temporary data directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the data directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn data_dir(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Path of the payload file for the default key.
    pub fn payload_path(&self) -> PathBuf {
        self.root().join("cncTools.json")
    }

    pub fn adapter(&self) -> FileAdapter {
        FileAdapter::at(self.payload_path())
    }

    /// Open a store on the payload file with default options.
    pub fn open(&self) -> (ToolStore<FileAdapter>, LoadOutcome) {
        ToolStore::open(self.adapter(), &StoreOptions::default())
    }

    /// Write raw bytes as the stored payload.
    pub fn write_payload(&self, payload: impl AsRef<[u8]>) {
        fs::write(self.payload_path(), payload).unwrap();
    }

    /// Raw stored payload.
    ///
    /// # Panics
    /// Panics if nothing has been stored yet.
    pub fn read_payload(&self) -> String {
        fs::read_to_string(self.payload_path())
            .unwrap_or_else(|_| panic!("No payload at {}", self.payload_path().display()))
    }

    /// Write a `config.toml` into the data directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.root().join("config.toml"), content).unwrap();
    }

    /// Assert that the stored payload contains `needle`.
    ///
    /// # Panics
    /// Panics with the payload if it does not.
    pub fn assert_payload_contains(&self, needle: &str) {
        let payload = self.read_payload();
        assert!(
            payload.contains(needle),
            "Expected payload to contain '{}'\nActual payload:\n{}",
            needle,
            payload
        );
    }
}
