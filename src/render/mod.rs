//! Render Module
//!
//! Buffers a header and rows of text cells, then emits them in one of the
//! supported formats.
//!
//! ## Formats
//! - `Table`: fixed-width terminal table; honours per-column max widths,
//!   wrap policies and the max total row width set by the layout engine
//! - `Csv`, `Html`, `Markdown`: line-oriented or markup output, always
//!   unconstrained

mod markup;
mod style;
mod table;
pub mod text;

use std::io::Write;

use clap::ValueEnum;

use crate::error::Result;
use crate::layout::LayoutTarget;

pub use style::{BoxGlyphs, StyleOptions, TableStyle};

/// Output format, chosen once per invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderFormat {
    #[default]
    #[value(alias = "auto", alias = "tabular")]
    Table,
    Csv,
    Html,
    #[value(alias = "md")]
    Markdown,
}

impl RenderFormat {
    /// Whether this format renders into fixed-width columns
    pub fn constrains_width(self) -> bool {
        matches!(self, RenderFormat::Table)
    }
}

/// How text wider than its column is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapPolicy {
    /// Let the column grow to fit
    #[default]
    None,
    /// Soft-wrap at the column width, keeping existing line breaks
    SoftPreserveBreaks,
}

/// Per-column rendering constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnConfig {
    /// Maximum content width; 0 means unconstrained
    pub width_max: usize,
    pub wrap: WrapPolicy,
}

/// Buffered table ready to be rendered
#[derive(Debug, Clone, Default)]
pub struct TableWriter {
    style: TableStyle,
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    columns: Vec<ColumnConfig>,
    allowed_row_length: Option<usize>,
}

impl TableWriter {
    pub fn new(style: TableStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn append_header<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.header = Some(cells.into_iter().map(Into::into).collect());
    }

    pub fn append_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn table_style(&self) -> &TableStyle {
        &self.style
    }

    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Constraints for a column (0-based), defaulting to unconstrained
    pub fn column_config(&self, index: usize) -> ColumnConfig {
        self.columns.get(index).copied().unwrap_or_default()
    }

    pub fn allowed_row_length(&self) -> Option<usize> {
        self.allowed_row_length
    }

    /// Number of columns across the header and every row
    pub fn column_count(&self) -> usize {
        let header = self.header.as_ref().map_or(0, Vec::len);
        self.rows.iter().map(Vec::len).fold(header, usize::max)
    }

    /// Render in the given format
    pub fn render<W: Write + ?Sized>(&self, format: RenderFormat, out: &mut W) -> Result<()> {
        match format {
            RenderFormat::Table => table::render_table(self, out),
            RenderFormat::Csv => markup::render_csv(self, out),
            RenderFormat::Html => markup::render_html(self, out),
            RenderFormat::Markdown => markup::render_markdown(self, out),
        }
    }

    fn column_mut(&mut self, index: usize) -> &mut ColumnConfig {
        if self.columns.len() <= index {
            self.columns.resize(index + 1, ColumnConfig::default());
        }
        &mut self.columns[index]
    }
}

impl LayoutTarget for TableWriter {
    fn style(&self) -> &TableStyle {
        &self.style
    }

    fn set_column_width(&mut self, index: usize, max: usize) {
        self.column_mut(index).width_max = max;
    }

    fn set_wrap_policy(&mut self, index: usize, policy: WrapPolicy) {
        self.column_mut(index).wrap = policy;
    }

    fn set_max_total_row_width(&mut self, width: usize) {
        self.allowed_row_length = Some(width).filter(|w| *w > 0);
    }
}
