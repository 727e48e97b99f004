//! MemTable Module
//!
//! In-memory view of a database, rebuilt from its WAL on open.
//!
//! ## Responsibilities
//! - Fast reads and writes in memory
//! - Single-writer/multi-reader access pattern
//! - Track size and entry count (compaction heuristics)
//! - Ordered iteration for listing, dumping and compaction
//!
//! ## Data Structure Choice
//! BTreeMap wrapped in RwLock:
//! - Ordered keys (listing is sorted by key)
//! - Deletes remove entries outright; there is no lower level to shadow

mod table;

pub use table::{MemTable, MemTableIterator};
