//! Value and expiry formatting shared by the commands.

use std::borrow::Cow;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{PdaError, Result};

/// Shown on a terminal instead of non-UTF-8 values
pub const BINARY_PLACEHOLDER: &str = "(omitted binary data)";

/// Text form of a value.
///
/// On a terminal, invalid UTF-8 is replaced by a placeholder unless
/// `include_binary` is set; otherwise it is decoded lossily.
pub fn format_bytes(include_binary: bool, tty: bool, value: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(value) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) if tty && !include_binary => Cow::Borrowed(BINARY_PLACEHOLDER),
        Err(_) => String::from_utf8_lossy(value),
    }
}

/// Raw bytes to print for a value, with the same placeholder rule as `format_bytes`
pub fn printable_bytes(include_binary: bool, tty: bool, value: &[u8]) -> &[u8] {
    if tty && !include_binary && std::str::from_utf8(value).is_err() {
        return BINARY_PLACEHOLDER.as_bytes();
    }
    value
}

/// TTL cell: `never`, `<rfc3339> (expired)` or `<rfc3339> (in 1h2m3s)`
pub fn format_expiry(expires_at: u64, now: u64) -> String {
    if expires_at == 0 {
        return "never".to_string();
    }
    let stamp = DateTime::<Utc>::from_timestamp(expires_at as i64, 0)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| expires_at.to_string());

    if expires_at <= now {
        return format!("{} (expired)", stamp);
    }
    format!("{} (in {})", stamp, format_remaining(expires_at - now))
}

/// Compact duration: `45s`, `2m5s`, `1h0m0s`.
///
/// Hours are the largest unit and fields are not space separated, unlike
/// `humantime::format_duration`, so TTL cells keep the `1h2m3s` form
/// existing listings and scripts expect.
pub fn format_remaining(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}h{}m{}s", h, m, s)
    } else if m > 0 {
        format!("{}m{}s", m, s)
    } else {
        format!("{}s", s)
    }
}

/// Parse a TTL such as `90s`, `15m`, `2h`, `1d` or `1h30m`
pub fn parse_ttl(raw: &str) -> Result<Duration> {
    let ttl = humantime::parse_duration(raw.trim())
        .map_err(|_| PdaError::InvalidDuration(raw.to_string()))?;
    if ttl.as_secs() == 0 {
        return Err(PdaError::InvalidDuration(raw.to_string()));
    }
    Ok(ttl)
}
