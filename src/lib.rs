//! # pda
//!
//! A command-line client over an embedded key-value store with:
//! - Multiple named databases under one data directory
//! - Write-Ahead Logging (WAL) for durability, with crash recovery
//! - Secret and expiring values
//! - Terminal-width-aware table listing, plus CSV, HTML and Markdown
//! - NDJSON dump and restore
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Commands (Session)                       │
//! │     get / set / del / delete-db / list / dump / restore      │
//! └───────────────┬─────────────────────────────┬───────────────┘
//!                 │                             │
//!                 ▼                             ▼
//!   ┌───────────────────────────┐  ┌───────────────────────────┐
//!   │     Store (catalog)       │  │  Layout engine + Renderer │
//!   │  KEY@DB -> Database       │  │  widths -> TableWriter    │
//!   └─────────────┬─────────────┘  └───────────────────────────┘
//!                 │
//!        ┌────────┴────────┐
//!        ▼                 ▼
//!   ┌─────────┐      ┌──────────┐
//!   │   WAL   │      │ MemTable │
//!   │ (Append)│      │ (RwLock) │
//!   └─────────┘      └──────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod wal;
pub mod memtable;
pub mod store;

pub mod layout;
pub mod render;
pub mod commands;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PdaError, Result};
pub use config::Config;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of pda
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
