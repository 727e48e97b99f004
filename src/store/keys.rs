//! Key and database name parsing
//!
//! Targets are written `KEY[@DB]`; database arguments are `DB` or `@DB`.
//! Both parts are case-insensitive and stored lowercase.

use crate::error::{PdaError, Result};

/// Database used when a target names none
pub const DEFAULT_DB: &str = "default";

/// A parsed `KEY[@DB]` target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub key: Vec<u8>,
    /// Empty when no database was given and defaults were not requested
    pub db: String,
}

/// Split `KEY[@DB]` into its key and database.
///
/// With `defaults`, a target without `@` resolves to the default database.
pub fn parse_key(raw: &str, defaults: bool) -> Result<Target> {
    let parts: Vec<&str> = raw.split('@').collect();
    match parts.as_slice() {
        [key] => Ok(Target {
            key: key.to_lowercase().into_bytes(),
            db: if defaults {
                DEFAULT_DB.to_string()
            } else {
                String::new()
            },
        }),
        [key, db] => Ok(Target {
            key: key.to_lowercase().into_bytes(),
            db: checked_name(db.to_lowercase())?,
        }),
        _ => Err(PdaError::BadKeyFormat),
    }
}

/// Normalize a `DB` or `@DB` argument
pub fn parse_db(raw: &str, defaults: bool) -> Result<String> {
    let trimmed = raw.trim();
    let db = trimmed.strip_prefix('@').unwrap_or(trimmed);
    if db.is_empty() {
        if defaults {
            return Ok(DEFAULT_DB.to_string());
        }
        return Err(PdaError::BadDbFormat);
    }
    checked_name(db.to_lowercase())
}

/// Database names become directory names; reject anything that walks the tree
fn checked_name(name: String) -> Result<String> {
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(PdaError::BadDbFormat);
    }
    Ok(name)
}

/// How a target is echoed back in confirmation prompts
pub fn display_target(raw: &str) -> Result<String> {
    let target = parse_key(raw, true)?;
    if raw.contains('@') || target.db.is_empty() {
        return Ok(raw.to_string());
    }
    Ok(format!("{}@{}", raw, target.db))
}
