//! Data directory and store setup
//!
//! Every command that touches tools goes through an [`AppContext`], which
//! resolves the data directory, reads its `config.toml` and opens the store.

use std::path::Path;

use cnc_core::{FileAdapter, LoadOutcome, StoreConfig, ToolStore, default_data_dir};
use cnc_fs::NormalizedPath;
use colored::Colorize;

use crate::error::Result;

/// Resolved data directory plus its configuration
#[derive(Debug, Clone)]
pub struct AppContext {
    data_dir: NormalizedPath,
    config: StoreConfig,
}

impl AppContext {
    /// Use `data_dir` if given, otherwise the platform default.
    pub fn resolve(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = data_dir
            .map(NormalizedPath::new)
            .unwrap_or_else(default_data_dir);
        Self::new(data_dir)
    }

    pub fn new(data_dir: NormalizedPath) -> Result<Self> {
        let config = StoreConfig::load(&data_dir)?;
        tracing::debug!(data_dir = %data_dir, key = %config.storage.key, "resolved context");
        Ok(Self { data_dir, config })
    }

    pub fn data_dir(&self) -> &NormalizedPath {
        &self.data_dir
    }

    /// Open the store, telling the user about anything unusual on load.
    pub fn open_store(&self) -> ToolStore<FileAdapter> {
        let adapter = self.config.file_adapter(&self.data_dir);
        let (store, outcome) = ToolStore::open(adapter, &self.config.store_options());
        report_load(&outcome);
        store
    }
}

fn report_load(outcome: &LoadOutcome) {
    match outcome {
        LoadOutcome::Restored { .. } | LoadOutcome::Empty => {}
        LoadOutcome::Seeded { durability } => {
            eprintln!(
                "{} No saved tools found, added demo tools.",
                "=>".blue().bold()
            );
            if let Some(error) = durability.error() {
                eprintln!("{} Demo tools were not saved: {}", "WARN".yellow().bold(), error);
            }
        }
        LoadOutcome::Recovered { error } => {
            eprintln!(
                "{} Could not load saved tools: {}",
                "WARN".yellow().bold(),
                error
            );
            eprintln!(
                "     Showing demo data; the stored file is kept until the next change."
            );
        }
    }
}
