//! `restore`: load an NDJSON dump back into a database as one batch.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::{PdaError, Result};
use crate::store::{parse_db, DEFAULT_DB};
use crate::wal::Operation;

use super::dump::DumpEntry;
use super::Session;

#[derive(Args, Debug, Clone, Default)]
pub struct RestoreArgs {
    /// DB or @DB (defaults to the default db)
    pub db: Option<String>,

    /// Path to an NDJSON dump (defaults to stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub(super) fn run(session: &mut Session<'_>, args: &RestoreArgs) -> Result<()> {
    let name = match &args.db {
        Some(raw) => parse_db(raw, false)?,
        None => DEFAULT_DB.to_string(),
    };

    let operations = match &args.file {
        Some(path) => parse_dump(BufReader::new(File::open(path)?))?,
        None => parse_dump(&mut *session.input)?,
    };

    let db = session.store.open(&name)?;
    let restored = db.apply_batch(operations)?;
    db.close()?;

    tracing::info!(db = %name, restored, "restored dump");
    writeln!(session.err, "Restored {} entries into @{}", restored, name)?;
    Ok(())
}

/// Parse every non-blank line into a put; errors carry the 1-based line number
fn parse_dump<R: BufRead>(reader: R) -> Result<Vec<Operation>> {
    let mut operations = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let entry: DumpEntry =
            serde_json::from_str(line).map_err(|e| PdaError::from(e).at_line(line_no))?;
        if entry.key.is_empty() {
            return Err(PdaError::MissingKey.at_line(line_no));
        }
        let record = entry.to_record().map_err(|e| e.at_line(line_no))?;

        operations.push(Operation::Put {
            key: entry.key.into_bytes(),
            record,
        });
    }

    Ok(operations)
}
