//! MemTable implementation
//!
//! BTreeMap-based memtable with RwLock for concurrency.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::store::Record;

/// In-memory table holding every live record of one database
pub struct MemTable {
    data: RwLock<BTreeMap<Vec<u8>, Record>>,
    /// Approximate size in bytes (keys + records)
    size: AtomicUsize,
}

impl MemTable {
    /// Create a new empty MemTable
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
            size: AtomicUsize::new(0),
        }
    }

    /// Get a record by key (read lock)
    pub fn get(&self, key: &[u8]) -> Option<Record> {
        self.data.read().get(key).cloned()
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.data.read().contains_key(key)
    }

    /// Insert or replace a record (write lock), returning the new size
    pub fn put(&self, key: Vec<u8>, record: Record) -> usize {
        let mut data = self.data.write();
        let key_len = key.len();
        let new_size = record.size();
        match data.insert(key, record) {
            // Key bytes are already counted for a replaced entry
            Some(old) => {
                self.size.fetch_sub(old.size(), Ordering::Relaxed);
                self.size.fetch_add(new_size, Ordering::Relaxed);
            }
            None => {
                self.size.fetch_add(key_len + new_size, Ordering::Relaxed);
            }
        }
        self.size.load(Ordering::Relaxed)
    }

    /// Remove a key (write lock), returning the previous record
    pub fn delete(&self, key: &[u8]) -> Option<Record> {
        let removed = self.data.write().remove(key);
        if let Some(old) = &removed {
            self.size.fetch_sub(key.len() + old.size(), Ordering::Relaxed);
        }
        removed
    }

    /// Get approximate size in bytes
    pub fn size(&self) -> usize {
        self.size.load(Ordering::Relaxed)
    }

    /// Get entry count
    pub fn entry_count(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Snapshot of all entries in sorted key order
    pub fn iter(&self) -> MemTableIterator {
        let entries: Vec<(Vec<u8>, Record)> = self
            .data
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        MemTableIterator {
            inner: entries.into_iter(),
        }
    }

    /// Clear all entries
    pub fn clear(&self) {
        self.data.write().clear();
        self.size.store(0, Ordering::Relaxed);
    }
}

impl Default for MemTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a MemTable snapshot
pub struct MemTableIterator {
    inner: std::vec::IntoIter<(Vec<u8>, Record)>,
}

impl Iterator for MemTableIterator {
    type Item = (Vec<u8>, Record);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
