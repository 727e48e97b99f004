//! WAL Writer
//!
//! Handles appending entries to the WAL file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::WalSyncStrategy;
use crate::error::Result;

use super::{Operation, WalEntry};

/// Writes entries to the WAL file
pub struct WalWriter {
    writer: BufWriter<File>,
    /// LSN the next appended entry receives
    next_lsn: u64,
    sync_strategy: WalSyncStrategy,
    /// Entries appended since the last fsync
    unsynced: usize,
}

impl WalWriter {
    /// Open or create a WAL file, numbering entries from 1
    pub fn open(path: &Path, sync_strategy: WalSyncStrategy) -> Result<Self> {
        Self::resume(path, sync_strategy, 0)
    }

    /// Open an existing WAL whose last valid entry carries `last_lsn`
    pub fn resume(path: &Path, sync_strategy: WalSyncStrategy, last_lsn: u64) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            next_lsn: last_lsn + 1,
            sync_strategy,
            unsynced: 0,
        })
    }

    /// Append an operation, returning the LSN it was assigned
    pub fn append(&mut self, operation: Operation) -> Result<u64> {
        let lsn = self.next_lsn;
        let frame = WalEntry::new(lsn, operation).encode()?;

        self.writer.write_all(&frame)?;
        self.next_lsn += 1;
        self.unsynced += 1;

        let due = match self.sync_strategy {
            WalSyncStrategy::EveryWrite => true,
            WalSyncStrategy::EveryNEntries { count } => self.unsynced >= count.max(1),
        };
        if due {
            self.sync()?;
        }

        Ok(lsn)
    }

    /// Force sync to disk
    pub fn sync(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.writer.get_ref().sync_data()?;
        self.unsynced = 0;
        Ok(())
    }

    /// Get the LSN the next entry will receive
    pub fn current_lsn(&self) -> u64 {
        self.next_lsn
    }

    /// Entries appended since the last fsync
    pub fn uncommitted_count(&self) -> usize {
        self.unsynced
    }
}
