//! The tool record store
//!
//! [`ToolStore`] owns the collection of tool records and writes it through
//! its [`PersistenceAdapter`] after every successful mutation. The in-memory
//! collection is the source of truth for the lifetime of the store: a failed
//! write is reported alongside the mutation result, never rolled back.

use crate::codec;
use crate::error::{Error, Result};
use crate::persistence::PersistenceAdapter;
use crate::query::{ToolQuery, TypeFilter};
use crate::record::{ToolFields, ToolRecord};
use crate::seed;

/// Behaviour of [`ToolStore::open`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Fill an empty store with demo records on first launch
    pub seed_demo_data: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}

/// Whether a change made it to durable storage
#[derive(Debug)]
pub enum Durability {
    /// Written through the persistence adapter
    Persisted,
    /// Kept in memory only; it will not survive a reload
    MemoryOnly(Error),
}

impl Durability {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted)
    }

    /// The write failure, if there was one.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Persisted => None,
            Self::MemoryOnly(error) => Some(error),
        }
    }
}

/// Result of a mutation that succeeded in memory
#[derive(Debug)]
#[must_use = "a Saved value may carry a persistence failure"]
pub struct Saved<T> {
    pub value: T,
    pub durability: Durability,
}

impl<T> Saved<T> {
    pub fn is_durable(&self) -> bool {
        self.durability.is_persisted()
    }

    /// Discard the persistence outcome.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Treat a persistence failure as an error.
    pub fn into_result(self) -> Result<T> {
        match self.durability {
            Durability::Persisted => Ok(self.value),
            Durability::MemoryOnly(error) => Err(error),
        }
    }
}

/// How the store obtained its initial collection
#[derive(Debug)]
pub enum LoadOutcome {
    /// A stored payload was decoded
    Restored { count: usize },
    /// Nothing was stored; the demo records were installed
    Seeded { durability: Durability },
    /// Nothing was stored and seeding is disabled
    Empty,
    /// The stored payload could not be read or decoded. The store fell back
    /// to the demo records (or to nothing, if seeding is disabled) and left
    /// the stored payload untouched.
    Recovered { error: Error },
}

/// In-memory collection of tool records backed by a persistence adapter
#[derive(Debug)]
pub struct ToolStore<A: PersistenceAdapter> {
    records: Vec<ToolRecord>,
    adapter: A,
}

impl<A: PersistenceAdapter> ToolStore<A> {
    /// Open a store on top of `adapter`.
    ///
    /// Loading never fails outright; problems with the stored payload are
    /// reported through [`LoadOutcome::Recovered`].
    pub fn open(adapter: A, options: &StoreOptions) -> (Self, LoadOutcome) {
        let mut store = Self {
            records: Vec::new(),
            adapter,
        };

        let loaded = store
            .adapter
            .load()
            .and_then(|payload| payload.map(|bytes| codec::decode(&bytes)).transpose());

        let outcome = match loaded {
            Ok(Some(records)) => {
                tracing::debug!(count = records.len(), "restored tool records");
                store.records = records;
                LoadOutcome::Restored {
                    count: store.records.len(),
                }
            }
            Ok(None) if options.seed_demo_data => {
                store.records = seed::demo_records();
                tracing::info!("no stored tools found, installed demo records");
                LoadOutcome::Seeded {
                    durability: store.persist(),
                }
            }
            Ok(None) => LoadOutcome::Empty,
            Err(error) => {
                tracing::error!(%error, "failed to load stored tools, falling back");
                if options.seed_demo_data {
                    store.records = seed::demo_records();
                }
                LoadOutcome::Recovered { error }
            }
        };

        (store, outcome)
    }

    /// Dispose of the store and hand back its adapter.
    pub fn close(self) -> A {
        self.adapter
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in storage order, which carries no meaning.
    pub fn records(&self) -> &[ToolRecord] {
        &self.records
    }

    /// Add a new record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationFailed`] if `name` or `machine` is blank.
    pub fn create(&mut self, fields: ToolFields) -> Result<Saved<ToolRecord>> {
        let record = ToolRecord::create(fields.validate()?);
        tracing::debug!(id = %record.id(), name = record.name(), "creating tool");
        self.records.push(record.clone());
        Ok(self.saved(record))
    }

    /// Replace every editable field of the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id and
    /// [`Error::ValidationFailed`] if `name` or `machine` is blank.
    pub fn update(&mut self, id: &str, fields: ToolFields) -> Result<Saved<ToolRecord>> {
        let index = self.index_of(id)?;
        let fields = fields.validate()?;

        let record = &mut self.records[index];
        record.replace_fields(fields);
        let record = record.clone();
        tracing::debug!(id, "updated tool");
        Ok(self.saved(record))
    }

    /// Remove the record with the given id and return it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id.
    pub fn delete(&mut self, id: &str) -> Result<Saved<ToolRecord>> {
        let index = self.index_of(id)?;
        let record = self.records.remove(index);
        tracing::debug!(id, name = record.name(), "deleted tool");
        Ok(self.saved(record))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ToolRecord> {
        self.records.iter().find(|r| r.id().as_str() == id)
    }

    /// Records matching `search_text` and `type_filter`, in presentation order.
    pub fn query(&self, search_text: &str, type_filter: TypeFilter) -> Vec<&ToolRecord> {
        self.run_query(&ToolQuery::new(search_text, type_filter))
    }

    pub fn run_query(&self, query: &ToolQuery) -> Vec<&ToolRecord> {
        let matches = query.apply(&self.records);
        tracing::debug!(total = self.records.len(), matched = matches.len(), "ran tool query");
        matches
    }

    /// Encode the whole collection.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        codec::encode(&self.records)
    }

    /// Decode a collection without touching any store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedData`] unless `bytes` is a JSON array of
    /// records that each carry an id.
    pub fn deserialize(bytes: &[u8]) -> Result<Vec<ToolRecord>> {
        codec::decode(bytes)
    }

    /// Backup payload; identical to [`ToolStore::serialize`].
    pub fn export_all(&self) -> Result<Vec<u8>> {
        self.serialize()
    }

    /// Replace the whole collection with a decoded backup.
    ///
    /// Returns the number of records now in the store. On error the current
    /// collection is left untouched.
    pub fn import_all(&mut self, bytes: &[u8]) -> Result<Saved<usize>> {
        let records = Self::deserialize(bytes)?;
        tracing::info!(previous = self.records.len(), imported = records.len(), "importing tools");
        self.records = records;
        let count = self.records.len();
        Ok(self.saved(count))
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id().as_str() == id)
            .ok_or_else(|| Error::NotFound { id: id.to_string() })
    }

    fn saved<T>(&mut self, value: T) -> Saved<T> {
        Saved {
            value,
            durability: self.persist(),
        }
    }

    fn persist(&mut self) -> Durability {
        let result = self
            .serialize()
            .and_then(|bytes| self.adapter.save(&bytes));
        match result {
            Ok(()) => Durability::Persisted,
            Err(error) => {
                tracing::warn!(%error, "tool changes kept in memory only");
                Durability::MemoryOnly(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryAdapter;
    use crate::record::ToolType;
    use pretty_assertions::assert_eq;

    fn empty_store() -> ToolStore<MemoryAdapter> {
        let (store, _) = ToolStore::open(
            MemoryAdapter::with_payload("[]"),
            &StoreOptions::default(),
        );
        store
    }

    #[test]
    fn open_restores_stored_payload() {
        let (_, outcome) = ToolStore::open(MemoryAdapter::with_payload("[]"), &StoreOptions::default());
        assert!(matches!(outcome, LoadOutcome::Restored { count: 0 }));
    }

    #[test]
    fn open_without_seeding_starts_empty() {
        let options = StoreOptions {
            seed_demo_data: false,
        };
        let (store, outcome) = ToolStore::open(MemoryAdapter::new(), &options);
        assert!(matches!(outcome, LoadOutcome::Empty));
        assert!(store.is_empty());
        assert_eq!(store.close().write_count(), 0);
    }

    #[test]
    fn seed_write_failure_keeps_demo_records_in_memory() {
        let mut adapter = MemoryAdapter::new();
        adapter.fail_writes(true);

        let (store, outcome) = ToolStore::open(adapter, &StoreOptions::default());

        match outcome {
            LoadOutcome::Seeded {
                durability: Durability::MemoryOnly(error),
            } => assert!(matches!(error, Error::WriteFailed { .. })),
            other => panic!("expected memory-only seed, got {other:?}"),
        }
        assert_eq!(store.len(), 3);
        assert_eq!(store.close().payload(), None);
    }

    #[test]
    fn recovery_without_seeding_opens_empty() {
        let options = StoreOptions {
            seed_demo_data: false,
        };
        let (store, outcome) =
            ToolStore::open(MemoryAdapter::with_payload("{ not json"), &options);

        assert!(matches!(
            outcome,
            LoadOutcome::Recovered {
                error: Error::MalformedData { .. }
            }
        ));
        assert!(store.is_empty());
        let adapter = store.close();
        assert_eq!(adapter.write_count(), 0);
        assert_eq!(adapter.payload(), Some("{ not json".as_bytes()));
    }

    #[test]
    fn update_checks_existence_before_validation() {
        let mut store = empty_store();
        let err = store
            .update("missing", ToolFields::new("", ToolType::Mill, ""))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn saved_into_result_surfaces_write_failure() {
        let mut store = empty_store();
        let saved = store
            .create(ToolFields::new("Drill", ToolType::Drill, "Haas"))
            .unwrap();
        assert!(saved.is_durable());
        assert!(saved.into_result().is_ok());

        let mut adapter = MemoryAdapter::with_payload("[]");
        adapter.fail_writes(true);
        let (mut store, _) = ToolStore::open(adapter, &StoreOptions::default());

        let saved = store
            .create(ToolFields::new("Drill", ToolType::Drill, "Haas"))
            .unwrap();
        assert!(!saved.is_durable());
        assert!(matches!(saved.into_result(), Err(Error::WriteFailed { .. })));
    }
}
