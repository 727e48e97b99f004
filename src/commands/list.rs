//! `list`: render the contents of a database as a table, CSV, HTML or
//! Markdown.
//!
//! Every cell updates the content widths as it is buffered. Table output
//! then asks the layout engine for column widths sized to the terminal;
//! the other formats are rendered unconstrained.

use std::io::Write;

use clap::Args;

use crate::error::Result;
use crate::layout::{apply_column_constraints, ColumnKind, ColumnSet, ContentWidths};
use crate::render::{RenderFormat, TableStyle, TableWriter};
use crate::store::unix_now;

use super::format::{format_bytes, format_expiry};
use super::{target_db, Session};

/// Shown in place of secret values
pub const SECRET_PLACEHOLDER: &str = "[secret: pass --secret to view]";

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// DB or @DB (defaults to the default db)
    pub db: Option<String>,

    /// Include binary data in text output
    #[arg(short, long)]
    pub binary: bool,

    /// Display values marked as secret
    #[arg(short = 'S', long)]
    pub secret: bool,

    /// Suppress the key column
    #[arg(long)]
    pub no_keys: bool,

    /// Suppress the value column
    #[arg(long)]
    pub no_values: bool,

    /// Append a TTL column when entries expire
    #[arg(short, long)]
    pub ttl: bool,

    /// Omit the header row
    #[arg(long)]
    pub no_header: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = RenderFormat::Table)]
    pub format: RenderFormat,
}

pub(super) fn run(session: &mut Session<'_>, args: &ListArgs) -> Result<()> {
    let columns = ColumnSet::select(!args.no_keys, !args.no_values, args.ttl)?;
    let target = target_db(session.store, args.db.as_deref())?;

    let mut table = TableWriter::new(TableStyle::default());
    let mut widths = ContentWidths::new(columns.len());

    if !args.no_header {
        let header = columns.header_cells();
        widths.observe(&header);
        table.append_header(header);
    }

    let tty = session.out.is_terminal();
    let now = unix_now();

    session.store.read(&target, |db, _| {
        for (key, record) in db.entries() {
            let hidden = record.is_secret() && !args.secret;
            let cells: Vec<String> = columns
                .kinds()
                .iter()
                .map(|column| match column {
                    ColumnKind::Key => String::from_utf8_lossy(&key).into_owned(),
                    ColumnKind::Value if hidden => SECRET_PLACEHOLDER.to_string(),
                    ColumnKind::Value => format_bytes(args.binary, tty, &record.value).into_owned(),
                    ColumnKind::Ttl => format_expiry(record.expires_at, now),
                })
                .collect();

            widths.observe(&cells);
            table.append_row(cells);
        }
        Ok(())
    })?;

    if args.format.constrains_width() {
        let total_width = session.width.resolve(&*session.out);
        apply_column_constraints(&mut table, &columns, total_width, &widths);
    }

    table.render(args.format, &mut *session.out)?;
    session.out.flush()?;
    Ok(())
}
