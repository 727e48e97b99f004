//! Store test suite
//!
//! A single database, the catalog of databases and target parsing.

mod keys_tests;

use pda::config::{Config, WalSyncStrategy};
use tempfile::TempDir;

// =============================================================================
// Shared Helpers
// =============================================================================

pub fn test_config(dir: &TempDir) -> Config {
    Config::builder()
        .data_dir(dir.path().join("stores"))
        .wal_sync_strategy(WalSyncStrategy::EveryWrite)
        .build()
}
