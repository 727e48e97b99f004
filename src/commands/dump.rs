//! `dump`: write every entry of a database as one JSON object per line.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::{PdaError, Result};
use crate::store::Record;

use super::{target_db, Session};

/// How values are written into the dump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DumpEncoding {
    /// Text when the value is valid UTF-8, base64 otherwise
    #[default]
    Auto,
    Base64,
    /// Fail on values that are not valid UTF-8
    Text,
}

/// One line of a dump
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DumpEntry {
    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub secret: bool,

    /// Unix seconds; 0 means the entry never expires
    #[serde(default, skip_serializing_if = "is_zero")]
    pub expires_at: u64,
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

impl DumpEntry {
    /// Encode a stored record under the given mode
    pub fn encode(key: &[u8], record: &Record, mode: DumpEncoding) -> Result<Self> {
        let key = String::from_utf8_lossy(key).into_owned();
        let text = std::str::from_utf8(&record.value).ok();

        let (value, encoding) = match (mode, text) {
            (DumpEncoding::Base64, _) | (DumpEncoding::Auto, None) => {
                (STANDARD.encode(&record.value), "base64")
            }
            (DumpEncoding::Text, None) => return Err(PdaError::NonUtf8Value(key)),
            (_, Some(text)) => (text.to_string(), "text"),
        };

        Ok(Self {
            key,
            value,
            encoding: Some(encoding.to_string()),
            secret: record.is_secret(),
            expires_at: record.expires_at,
        })
    }

    /// Decode the value back into raw bytes
    pub fn decode_value(&self) -> Result<Vec<u8>> {
        match self.encoding.as_deref() {
            None | Some("") | Some("text") => Ok(self.value.as_bytes().to_vec()),
            Some("base64") => STANDARD
                .decode(&self.value)
                .map_err(|e| PdaError::Serialization(e.to_string())),
            Some(other) => Err(PdaError::UnsupportedEncoding(other.to_string())),
        }
    }

    /// Rebuild the stored record, secret flag and expiry included
    pub fn to_record(&self) -> Result<Record> {
        Ok(Record::new(self.decode_value()?)
            .secret(self.secret)
            .with_expiry(self.expires_at))
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct DumpArgs {
    /// DB or @DB (defaults to the default db)
    pub db: Option<String>,

    /// Value encoding
    #[arg(short, long, value_enum, default_value_t = DumpEncoding::Auto)]
    pub encoding: DumpEncoding,

    /// Include entries marked as secret
    #[arg(long)]
    pub secret: bool,
}

pub(super) fn run(session: &mut Session<'_>, args: &DumpArgs) -> Result<()> {
    let target = target_db(session.store, args.db.as_deref())?;
    let out = &mut *session.out;

    let written = session.store.read(&target, |db, _| {
        let mut written = 0usize;
        for (key, record) in db.entries() {
            if record.is_secret() && !args.secret {
                continue;
            }
            let entry = DumpEntry::encode(&key, &record, args.encoding)?;
            writeln!(out, "{}", serde_json::to_string(&entry)?)?;
            written += 1;
        }
        Ok(written)
    })?;

    session.out.flush()?;
    tracing::debug!(db = %target, written, "dumped entries");
    Ok(())
}
