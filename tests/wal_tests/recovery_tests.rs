//! Tests for WAL Recovery
//!
//! These tests verify:
//! - Recovery from a clean WAL
//! - Recovery from an empty WAL
//! - Partial writes are truncated away
//! - Corrupted entries stop replay
//! - Verify mode leaves the file untouched

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use pda::config::WalSyncStrategy;
use pda::wal::{RecoveryResult, WalEntry, WalRecovery, WalWriter};

use super::{put, setup_temp_wal};

// =============================================================================
// Helper Functions
// =============================================================================

fn write_entries_via_writer(path: &Path, count: usize) {
    let mut writer = WalWriter::open(path, WalSyncStrategy::EveryWrite).unwrap();
    for i in 0..count {
        writer.append(put(&format!("key{}", i), &format!("value{}", i))).unwrap();
    }
}

fn append_bytes(path: &Path, bytes: &[u8]) {
    let mut file = OpenOptions::new().append(true).open(path).unwrap();
    file.write_all(bytes).unwrap();
    file.sync_all().unwrap();
}

// =============================================================================
// Clean WAL Tests
// =============================================================================

#[test]
fn test_recover_empty_file() {
    let (_temp, wal_path) = setup_temp_wal();
    File::create(&wal_path).unwrap();

    let (entries, result) = WalRecovery::recover(&wal_path).unwrap();

    assert!(entries.is_empty());
    assert_eq!(result, RecoveryResult::default());
}

#[test]
fn test_recover_clean_wal() {
    let (_temp, wal_path) = setup_temp_wal();
    write_entries_via_writer(&wal_path, 5);

    let (entries, result) = WalRecovery::recover(&wal_path).unwrap();

    assert_eq!(entries.len(), 5);
    assert_eq!(result.entries_recovered, 5);
    assert_eq!(result.entries_corrupted, 0);
    assert_eq!(result.last_lsn, 5);
    assert!(!result.was_truncated);
}

// =============================================================================
// Damaged Tail Tests
// =============================================================================

#[test]
fn test_recover_truncates_partial_write() {
    let (_temp, wal_path) = setup_temp_wal();
    write_entries_via_writer(&wal_path, 3);
    let clean_len = std::fs::metadata(&wal_path).unwrap().len();

    let frame = WalEntry::new(4, put("torn", "write")).encode().unwrap();
    append_bytes(&wal_path, &frame[..frame.len() / 2]);

    let (entries, result) = WalRecovery::recover(&wal_path).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(result.last_lsn, 3);
    assert_eq!(result.entries_corrupted, 0);
    assert!(result.was_truncated);
    assert_eq!(std::fs::metadata(&wal_path).unwrap().len(), clean_len);
}

#[test]
fn test_recover_stops_at_corrupt_entry() {
    let (_temp, wal_path) = setup_temp_wal();
    write_entries_via_writer(&wal_path, 2);
    let clean_len = std::fs::metadata(&wal_path).unwrap().len();

    let mut bad = WalEntry::new(3, put("bad", "crc")).encode().unwrap();
    let last = bad.len() - 1;
    bad[last] ^= 0x55;
    append_bytes(&wal_path, &bad);
    // A valid frame after the damage is not trusted either
    append_bytes(&wal_path, &WalEntry::new(4, put("after", "damage")).encode().unwrap());

    let (entries, result) = WalRecovery::recover(&wal_path).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(result.entries_corrupted, 1);
    assert_eq!(result.last_lsn, 2);
    assert!(result.was_truncated);
    assert_eq!(std::fs::metadata(&wal_path).unwrap().len(), clean_len);
}

#[test]
fn test_recovered_wal_accepts_new_writes() {
    let (_temp, wal_path) = setup_temp_wal();
    write_entries_via_writer(&wal_path, 2);
    append_bytes(&wal_path, &[0xaa; 5]);

    let (_, result) = WalRecovery::recover(&wal_path).unwrap();
    let mut writer =
        WalWriter::resume(&wal_path, WalSyncStrategy::EveryWrite, result.last_lsn).unwrap();
    writer.append(put("next", "one")).unwrap();
    drop(writer);

    let (entries, result) = WalRecovery::recover(&wal_path).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(result.last_lsn, 3);
    assert!(!result.was_truncated);
}

// =============================================================================
// Verify Tests
// =============================================================================

#[test]
fn test_verify_does_not_modify() {
    let (_temp, wal_path) = setup_temp_wal();
    write_entries_via_writer(&wal_path, 2);
    append_bytes(&wal_path, &[0u8; 7]);
    let damaged_len = std::fs::metadata(&wal_path).unwrap().len();

    let result = WalRecovery::verify(&wal_path).unwrap();

    assert_eq!(result.entries_recovered, 2);
    assert!(result.was_truncated);
    assert_eq!(std::fs::metadata(&wal_path).unwrap().len(), damaged_len);
}
