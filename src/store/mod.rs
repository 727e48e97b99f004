//! Store Module
//!
//! The catalog of named databases under one data directory.
//!
//! ## Layout
//! ```text
//! {data_dir}/
//!   ├── default/
//!   │     └── wal.log
//!   └── {name}/
//!         └── wal.log
//! ```

mod database;
mod keys;
mod record;

use std::fs;
use std::path::PathBuf;

pub use database::Database;
pub use keys::{display_target, parse_db, parse_key, Target, DEFAULT_DB};
pub use record::{unix_now, Record, META_SECRET};

use crate::config::Config;
use crate::error::{PdaError, Result};

/// Handle on the data directory
#[derive(Debug, Clone)]
pub struct Store {
    config: Config,
}

impl Store {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Data root, created on first use
    pub fn root(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.config.data_dir)?;
        Ok(self.config.data_dir.clone())
    }

    /// Path a database lives at, whether or not it exists yet
    pub fn path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.root()?.join(name))
    }

    /// Names of all existing databases, sorted
    pub fn all_stores(&self) -> Result<Vec<String>> {
        let mut stores = Vec::new();
        for entry in fs::read_dir(self.root()?)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                stores.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        stores.sort();
        Ok(stores)
    }

    /// Resolve a `DB`/`@DB` argument to the directory of an existing database
    pub fn find_store(&self, raw: &str) -> Result<PathBuf> {
        let name = parse_db(raw, false)?;
        let path = self.path(&name)?;
        if !path.is_dir() {
            return Err(PdaError::DatabaseNotFound(raw.to_string()));
        }
        Ok(path)
    }

    /// Open (creating if needed) the named database
    pub fn open(&self, name: &str) -> Result<Database> {
        let name = if name.is_empty() { DEFAULT_DB } else { name };
        tracing::debug!(db = name, "opening database");
        Database::open(&self.path(name)?, &self.config)
    }

    /// Remove a database directory and everything in it
    pub fn delete_store(&self, raw: &str) -> Result<PathBuf> {
        let path = self.find_store(raw)?;
        fs::remove_dir_all(&path)?;
        tracing::info!(path = %path.display(), "deleted database");
        Ok(path)
    }

    /// Run a read-only closure against the database a `KEY[@DB]` target names
    pub fn read<T, F>(&self, target: &str, f: F) -> Result<T>
    where
        F: FnOnce(&Database, &[u8]) -> Result<T>,
    {
        let target = parse_key(target, true)?;
        let db = self.open(&target.db)?;
        let out = f(&db, &target.key)?;
        drop(db);
        Ok(out)
    }

    /// Run a mutating closure; the WAL is synced and the database closed on success
    pub fn write<T, F>(&self, target: &str, f: F) -> Result<T>
    where
        F: FnOnce(&Database, &[u8]) -> Result<T>,
    {
        let target = parse_key(target, true)?;
        let db = self.open(&target.db)?;
        let out = f(&db, &target.key)?;
        db.close()?;
        Ok(out)
    }
}
