//! Error types for pda
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using PdaError
pub type Result<T> = std::result::Result<T, PdaError>;

/// Unified error type for pda operations
#[derive(Debug, Error)]
pub enum PdaError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // WAL Errors
    // -------------------------------------------------------------------------
    #[error("WAL corruption detected: {0}")]
    WalCorruption(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("key {0:?} not found")]
    KeyNotFound(String),

    #[error("{0:?} does not exist")]
    DatabaseNotFound(String),

    #[error("bad key format, use KEY@DB")]
    BadKeyFormat,

    #[error("bad db format, use DB or @DB")]
    BadDbFormat,

    #[error("{0:?} is marked secret; re-run with --include-secret to display it")]
    SecretValue(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("unsupported encoding {0:?}")]
    UnsupportedEncoding(String),

    #[error("key {0:?} contains non-UTF8 data; use --encoding=auto or base64")]
    NonUtf8Value(String),

    #[error("missing key")]
    MissingKey,

    #[error("line {line}: {source}")]
    Restore {
        line: usize,
        #[source]
        source: Box<PdaError>,
    },

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("no columns selected; disable --no-keys/--no-values or pass --ttl")]
    NoColumns,

    #[error("invalid duration {0:?}; use forms like 90s, 15m, 2h, 1d or 1h30m")]
    InvalidDuration(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PdaError {
    /// Attach a 1-based input line number to an error raised while restoring.
    pub fn at_line(self, line: usize) -> Self {
        PdaError::Restore {
            line,
            source: Box::new(self),
        }
    }
}
