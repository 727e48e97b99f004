use std::io::Write;

use clap::Args;

use crate::error::{PdaError, Result};

use super::format::printable_bytes;
use super::Session;

#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    /// KEY[@DB]
    pub key: String,

    /// Include binary data in text output
    #[arg(short = 'b', long)]
    pub include_binary: bool,

    /// Display values marked as secret
    #[arg(long)]
    pub include_secret: bool,
}

pub(super) fn run(session: &mut Session<'_>, args: &GetArgs) -> Result<()> {
    let record = session.store.read(&args.key, |db, key| {
        db.get(key)
            .ok_or_else(|| PdaError::KeyNotFound(args.key.clone()))
    })?;

    if record.is_secret() && !args.include_secret {
        return Err(PdaError::SecretValue(args.key.clone()));
    }

    let tty = session.out.is_terminal();
    session
        .out
        .write_all(printable_bytes(args.include_binary, tty, &record.value))?;
    if tty && !record.value.ends_with(b"\n") {
        writeln!(session.out)?;
    }
    session.out.flush()?;
    Ok(())
}
