//! Database
//!
//! One named database: a WAL on disk mirrored by a memtable in memory.
//!
//! ## Responsibilities
//! - Replay the WAL on open (with partial-write recovery)
//! - Log every mutation before applying it
//! - Hide expired records from readers
//! - Compact the log on close once it is mostly superseded entries

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::Result;
use crate::memtable::MemTable;
use crate::wal::{Operation, WalRecovery, WalWriter};

use super::record::{unix_now, Record};

/// An open database
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
///
/// - **Writes** (put/delete/batch): Serialized by the `wal` mutex, which is
///   held while the memtable is updated so log order equals apply order
/// - **Reads** (get/entries): MemTable RwLock only
pub struct Database {
    config: Config,

    /// Directory of this database
    dir: PathBuf,

    /// Write-ahead log for durability (exclusive access needed)
    wal: Mutex<WalWriter>,

    /// Live records (internal RwLock)
    memtable: MemTable,

    /// Entries currently in the log, superseded ones included
    log_entries: AtomicU64,
}

impl Database {
    const WAL_FILENAME: &'static str = "wal.log";
    const COMPACT_FILENAME: &'static str = "wal.log.compact";

    /// Open or create the database stored in `dir`
    pub fn open(dir: &Path, config: &Config) -> Result<Self> {
        fs::create_dir_all(dir)?;

        let wal_path = dir.join(Self::WAL_FILENAME);
        let memtable = MemTable::new();
        let mut last_lsn = 0;
        let mut log_entries = 0;

        if wal_path.exists() {
            let (entries, recovery) = WalRecovery::recover(&wal_path)?;
            tracing::debug!(
                dir = %dir.display(),
                recovered = recovery.entries_recovered,
                corrupted = recovery.entries_corrupted,
                last_lsn = recovery.last_lsn,
                "replayed WAL"
            );

            for entry in entries {
                match entry.operation {
                    Operation::Put { key, record } => {
                        memtable.put(key, record);
                    }
                    Operation::Delete { key } => {
                        memtable.delete(&key);
                    }
                }
            }
            last_lsn = recovery.last_lsn;
            log_entries = recovery.entries_recovered;
        }

        let wal = WalWriter::resume(&wal_path, config.wal_sync_strategy, last_lsn)?;

        Ok(Self {
            config: config.clone(),
            dir: dir.to_path_buf(),
            wal: Mutex::new(wal),
            memtable,
            log_entries: AtomicU64::new(log_entries),
        })
    }

    /// Get a live record by key; expired records read as absent
    pub fn get(&self, key: &[u8]) -> Option<Record> {
        self.memtable
            .get(key)
            .filter(|record| !record.is_expired(unix_now()))
    }

    /// Put a record
    pub fn put(&self, key: &[u8], record: Record) -> Result<()> {
        self.apply(Operation::Put {
            key: key.to_vec(),
            record,
        })
    }

    /// Delete a key, returning whether a live record was removed
    pub fn delete(&self, key: &[u8]) -> Result<bool> {
        let existed = self.get(key).is_some();
        self.apply(Operation::Delete { key: key.to_vec() })?;
        Ok(existed)
    }

    /// Apply a sequence of operations under one writer lock
    pub fn apply_batch(&self, operations: Vec<Operation>) -> Result<usize> {
        let mut wal = self.wal.lock();
        let count = operations.len();
        for operation in operations {
            wal.append(operation.clone())?;
            self.log_entries.fetch_add(1, Ordering::Relaxed);
            self.apply_to_memtable(operation);
        }
        wal.sync()?;
        Ok(count)
    }

    /// Live, unexpired entries in sorted key order
    pub fn entries(&self) -> impl Iterator<Item = (Vec<u8>, Record)> {
        let now = unix_now();
        self.memtable
            .iter()
            .filter(move |(_, record)| !record.is_expired(now))
    }

    /// Force pending WAL entries to disk
    pub fn sync(&self) -> Result<()> {
        let mut wal = self.wal.lock();
        if wal.uncommitted_count() == 0 {
            return Ok(());
        }
        wal.sync()
    }

    /// Close the database, compacting the log when it is worth it
    pub fn close(self) -> Result<()> {
        self.sync()?;
        if self.should_compact() {
            self.compact()?;
        }
        Ok(())
    }

    /// Rewrite the log so it holds exactly one entry per live key
    pub fn compact(&self) -> Result<()> {
        let mut wal = self.wal.lock();
        let compact_path = self.dir.join(Self::COMPACT_FILENAME);
        let wal_path = self.dir.join(Self::WAL_FILENAME);
        match fs::remove_file(&compact_path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let now = unix_now();
        let mut fresh = WalWriter::open(&compact_path, self.config.wal_sync_strategy)?;
        let mut kept = 0u64;
        for (key, record) in self.memtable.iter() {
            if record.is_expired(now) {
                continue;
            }
            fresh.append(Operation::Put { key, record })?;
            kept += 1;
        }
        fresh.sync()?;
        let last_lsn = fresh.current_lsn() - 1;
        drop(fresh);

        fs::rename(&compact_path, &wal_path)?;
        *wal = WalWriter::resume(&wal_path, self.config.wal_sync_strategy, last_lsn)?;

        let before = self.log_entries.swap(kept, Ordering::Relaxed);
        tracing::debug!(dir = %self.dir.display(), before, after = kept, "compacted WAL");
        Ok(())
    }

    fn should_compact(&self) -> bool {
        let entries = self.log_entries.load(Ordering::Relaxed);
        let live = self.memtable.entry_count() as u64;
        entries >= self.config.compaction_min_entries && entries > live.saturating_mul(2)
    }

    fn apply(&self, operation: Operation) -> Result<()> {
        let mut wal = self.wal.lock();
        wal.append(operation.clone())?;
        self.log_entries.fetch_add(1, Ordering::Relaxed);
        self.apply_to_memtable(operation);
        Ok(())
    }

    fn apply_to_memtable(&self, operation: Operation) {
        match operation {
            Operation::Put { key, record } => {
                self.memtable.put(key, record);
            }
            Operation::Delete { key } => {
                self.memtable.delete(&key);
            }
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Directory holding this database
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the write-ahead log
    pub fn wal_path(&self) -> PathBuf {
        self.dir.join(Self::WAL_FILENAME)
    }

    /// Entries currently in the log, superseded ones included
    pub fn log_entries(&self) -> u64 {
        self.log_entries.load(Ordering::Relaxed)
    }

    /// Number of records held in memory, expired ones included
    pub fn len(&self) -> usize {
        self.memtable.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.memtable.is_empty()
    }
}
