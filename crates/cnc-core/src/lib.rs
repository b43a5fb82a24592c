//! Tool record store for the CNC tool inventory
//!
//! This crate owns everything with real invariants in the inventory:
//!
//! - **Records**: [`ToolRecord`], its editable part [`ToolFields`] and the
//!   closed [`ToolType`] category set
//! - **Store**: [`ToolStore`], the id-addressable collection with create,
//!   update, delete, lookup and query, plus import/export
//! - **Persistence**: the [`PersistenceAdapter`] seam with file-backed and
//!   in-memory implementations
//! - **Configuration**: [`StoreConfig`], read from the data directory
//!
//! # Architecture
//!
//! ```text
//!            presentation (cnc-cli)
//!                     |
//!                 ToolStore ---- ToolQuery
//!                     |
//!            PersistenceAdapter
//!              /            \
//!       FileAdapter     MemoryAdapter
//!            |
//!         cnc-fs
//! ```
//!
//! # Example
//!
//! ```
//! use cnc_core::{MemoryAdapter, StoreOptions, ToolFields, ToolStore, ToolType, TypeFilter};
//!
//! let (mut store, _) = ToolStore::open(MemoryAdapter::new(), &StoreOptions::default());
//! let saved = store
//!     .create(ToolFields::new("Endmill 6", ToolType::Mill, "Haas VF-2").with_position("T05"))
//!     .unwrap();
//! assert!(saved.is_durable());
//!
//! let mills = store.query("endmill", TypeFilter::Only(ToolType::Mill));
//! assert_eq!(mills.len(), 1);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod persistence;
pub mod query;
pub mod record;
pub mod seed;
pub mod store;

pub use config::{StoreConfig, default_data_dir};
pub use error::{Error, Result};
pub use persistence::{DEFAULT_STORAGE_KEY, FileAdapter, MemoryAdapter, PersistenceAdapter};
pub use query::{ToolQuery, TypeFilter};
pub use record::{ToolFields, ToolId, ToolRecord, ToolType};
pub use store::{Durability, LoadOutcome, Saved, StoreOptions, ToolStore};
