//! Configuration for pda
//!
//! Centralized configuration with sensible defaults.

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "PDA_DATA_DIR";

/// Main configuration for a pda store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory holding one sub-directory per database
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── default/wal.log
    ///     └── {name}/wal.log
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // WAL Configuration
    // -------------------------------------------------------------------------
    /// Sync strategy: how often to fsync WAL
    pub wal_sync_strategy: WalSyncStrategy,

    /// Log length below which a database is never compacted on close
    pub compaction_min_entries: u64,
}

/// WAL sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalSyncStrategy {
    /// fsync after every write (safest, slowest)
    EveryWrite,

    /// fsync after N uncommitted entries (balanced durability/performance)
    EveryNEntries { count: usize },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./pda_data"),
            wal_sync_strategy: WalSyncStrategy::EveryNEntries { count: 100 },
            compaction_min_entries: 1024,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve the configuration from the process environment.
    ///
    /// `PDA_DATA_DIR` wins; otherwise the user's data directory is used
    /// (`~/.local/share/pda/stores` on Linux).
    pub fn from_env() -> Self {
        let data_dir = env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| ProjectDirs::from("", "", "pda").map(|p| p.data_dir().join("stores")));

        match data_dir {
            Some(dir) => Self::builder().data_dir(dir).build(),
            None => Self::default(),
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all databases)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the WAL sync strategy
    pub fn wal_sync_strategy(mut self, strategy: WalSyncStrategy) -> Self {
        self.config.wal_sync_strategy = strategy;
        self
    }

    /// Set the minimum log length considered for compaction
    pub fn compaction_min_entries(mut self, entries: u64) -> Self {
        self.config.compaction_min_entries = entries;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
