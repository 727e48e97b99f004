use std::io::Write;

use clap::Args;

use crate::error::Result;
use crate::store::display_target;

use super::Session;

#[derive(Args, Debug, Clone)]
pub struct DelArgs {
    /// KEY[@DB]
    pub key: String,

    /// Force delete without confirmation
    #[arg(short, long)]
    pub force: bool,
}

pub(super) fn run(session: &mut Session<'_>, args: &DelArgs) -> Result<()> {
    let shown = display_target(&args.key)?;

    if !args.force {
        let question = format!("Are you sure you want to delete {:?}?", shown);
        if !session.confirm(&question)? {
            writeln!(session.err, "Did not delete {:?}", shown)?;
            return Ok(());
        }
    }

    let existed = session.store.write(&args.key, |db, key| db.delete(key))?;
    tracing::debug!(target_key = %shown, existed, "deleted key");
    Ok(())
}
