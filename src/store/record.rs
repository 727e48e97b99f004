//! Stored record
//!
//! The value plus the metadata the commands care about: the secret flag and
//! an optional expiry.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Meta bit marking a value as secret
pub const META_SECRET: u8 = 0x1;

/// A value with its user metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Raw value bytes
    pub value: Vec<u8>,

    /// User meta bits (see `META_SECRET`)
    pub meta: u8,

    /// Expiry in unix seconds; 0 means the record never expires
    pub expires_at: u64,
}

impl Record {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
            meta: 0,
            expires_at: 0,
        }
    }

    /// Set or clear the secret bit
    pub fn secret(mut self, secret: bool) -> Self {
        if secret {
            self.meta |= META_SECRET;
        } else {
            self.meta &= !META_SECRET;
        }
        self
    }

    /// Expire `ttl` after `now` (unix seconds)
    pub fn with_ttl(mut self, ttl: Duration, now: u64) -> Self {
        self.expires_at = now.saturating_add(ttl.as_secs().max(1));
        self
    }

    pub fn with_expiry(mut self, expires_at: u64) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn is_secret(&self) -> bool {
        self.meta & META_SECRET != 0
    }

    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at != 0 && self.expires_at <= now
    }

    /// Approximate in-memory footprint, used for memtable size tracking
    pub fn size(&self) -> usize {
        self.value.len() + std::mem::size_of::<u8>() + std::mem::size_of::<u64>()
    }
}

/// Current time in unix seconds
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
