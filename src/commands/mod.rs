//! Commands Module
//!
//! One submodule per CLI command. Every command runs against a `Session`,
//! so the binary wires in the real stdio and tests wire in buffers.

mod del;
mod delete_db;
mod dump;
mod format;
mod get;
mod list;
mod restore;
mod set;

use std::io::{BufRead, Write};

use clap::Subcommand;

use crate::error::Result;
use crate::layout::{TerminalSink, TerminalWidth};
use crate::store::Store;

pub use del::DelArgs;
pub use delete_db::DeleteDbArgs;
pub use dump::{DumpArgs, DumpEncoding, DumpEntry};
pub use format::{
    format_bytes, format_expiry, format_remaining, parse_ttl, printable_bytes, BINARY_PLACEHOLDER,
};
pub use get::GetArgs;
pub use list::{ListArgs, SECRET_PLACEHOLDER};
pub use restore::RestoreArgs;
pub use set::SetArgs;

/// I/O and store handles for one command invocation
pub struct Session<'a> {
    pub store: &'a Store,
    pub input: &'a mut dyn BufRead,
    pub out: &'a mut dyn TerminalSink,
    pub err: &'a mut dyn Write,
    pub width: TerminalWidth,
}

impl<'a> Session<'a> {
    /// Ask a yes/no question on `out`; only `y`/`Y` confirms
    pub(crate) fn confirm(&mut self, question: &str) -> Result<bool> {
        writeln!(self.out, "{} (y/n)", question)?;
        self.out.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}

/// Resolve a `[DB]` argument to `@name`, checking that the database exists
pub(crate) fn target_db(store: &Store, raw: Option<&str>) -> Result<String> {
    match raw {
        None => Ok(format!("@{}", crate::store::DEFAULT_DB)),
        Some(raw) => {
            let name = crate::store::parse_db(raw, false)?;
            store.find_store(&name)?;
            Ok(format!("@{}", name))
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a value for a key. Optionally specify a db.
    Get(GetArgs),

    /// Set a value for a key by passing VALUE or from stdin. Optionally specify a db.
    Set(SetArgs),

    /// Delete a key. Optionally specify a db.
    Del(DelArgs),

    /// Delete a database.
    #[command(name = "delete-db")]
    DeleteDb(DeleteDbArgs),

    /// List the contents of a db.
    List(ListArgs),

    /// Dump all key/value pairs as NDJSON.
    Dump(DumpArgs),

    /// Restore key/value pairs from an NDJSON dump.
    Restore(RestoreArgs),
}

impl Command {
    pub fn run(&self, session: &mut Session<'_>) -> Result<()> {
        match self {
            Command::Get(args) => get::run(session, args),
            Command::Set(args) => set::run(session, args),
            Command::Del(args) => del::run(session, args),
            Command::DeleteDb(args) => delete_db::run(session, args),
            Command::List(args) => list::run(session, args),
            Command::Dump(args) => dump::run(session, args),
            Command::Restore(args) => restore::run(session, args),
        }
    }
}
