//! Waterlog Core - Business logic for water-consumption tracking
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, errors/results)
//! - **store**: The in-memory authoritative collection of users
//! - **adapters**: Persistence to the CSV data file
//! - **services**: Logging and summary views for the shell

pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;
pub mod store;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use adapters::csv_file;
use config::Config;
use store::RecordStore;

// Re-export commonly used types at crate root
pub use adapters::{LoadReport, SaveReport};
pub use domain::result::{Error, OperationResult};
pub use domain::User;
pub use services::{EntryPoint, LogEntry, LogEvent, LoggingService, StoreSummary, UserSummary};

/// Main context for Waterlog operations
///
/// The primary entry point for the shell. Construction is explicit and
/// the context owns the store outright - there is no ambient global
/// state; teardown is simply going out of scope after the final save.
pub struct WaterlogContext {
    pub config: Config,
    pub store: RecordStore,
    data_path: PathBuf,
}

impl WaterlogContext {
    /// Create a new Waterlog context with an empty store
    pub fn new(waterlog_dir: &Path) -> Result<Self> {
        let config = Config::load(waterlog_dir)
            .with_context(|| format!("Failed to load settings from {:?}", waterlog_dir))?;
        let data_path = config.data_path(waterlog_dir);

        Ok(Self {
            config,
            store: RecordStore::new(),
            data_path,
        })
    }

    /// Path of the CSV data file this context reads and writes
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Load the data file into the store
    pub fn load(&mut self) -> domain::result::Result<LoadReport> {
        csv_file::load(&self.data_path, &mut self.store)
    }

    /// Save the store to the data file
    pub fn save(&self) -> domain::result::Result<SaveReport> {
        csv_file::save(&self.data_path, &self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_context_round_trip() {
        let dir = tempdir().unwrap();

        let mut ctx = WaterlogContext::new(dir.path()).unwrap();
        let report = ctx.load().unwrap();
        assert!(report.file_missing);

        ctx.store.add_user("u1", "Alice").unwrap();
        ctx.store.add_user_record("u1", "1.5").unwrap();
        let saved = ctx.save().unwrap();
        assert_eq!(saved.rows_written, 1);

        let mut fresh = WaterlogContext::new(dir.path()).unwrap();
        let report = fresh.load().unwrap();
        assert!(!report.file_missing);
        assert_eq!(fresh.store.get_user("u1").unwrap().records, vec![1.5]);
    }
}
