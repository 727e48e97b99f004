use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use directories::BaseDirs;

use crate::error::Result;

use super::Session;

#[derive(Args, Debug, Clone)]
pub struct DeleteDbArgs {
    /// DB or @DB
    pub db: String,

    /// Force delete without confirmation
    #[arg(short, long)]
    pub force: bool,
}

pub(super) fn run(session: &mut Session<'_>, args: &DeleteDbArgs) -> Result<()> {
    let path = session.store.find_store(&args.db)?;
    let base = BaseDirs::new();
    let shown = abbreviate_home(&path, base.as_ref().map(BaseDirs::home_dir));

    if !args.force {
        let question = format!("Are you sure you want to delete '{}'?", shown.display());
        if !session.confirm(&question)? {
            writeln!(session.err, "Did not delete {:?}", shown.display().to_string())?;
            return Ok(());
        }
    }

    session.store.delete_store(&args.db)?;
    writeln!(session.err, "Deleted {:?}", shown.display().to_string())?;
    Ok(())
}

/// Replace a leading home directory with `~`
fn abbreviate_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) => Path::new("~").join(rest),
        None => path.to_path_buf(),
    }
}
