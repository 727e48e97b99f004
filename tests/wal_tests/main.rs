//! WAL test suite
//!
//! Frame encoding, the writer, the reader and crash recovery.

mod recovery_tests;

use std::path::PathBuf;

use pda::store::Record;
use pda::wal::Operation;
use tempfile::TempDir;

// =============================================================================
// Shared Helpers
// =============================================================================

pub fn setup_temp_wal() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let wal_path = temp_dir.path().join("wal.log");
    (temp_dir, wal_path)
}

pub fn put(key: &str, value: &str) -> Operation {
    Operation::Put {
        key: key.as_bytes().to_vec(),
        record: Record::new(value.as_bytes()),
    }
}
