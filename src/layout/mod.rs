//! Layout Module
//!
//! Adaptive column widths for the fixed-width table output of `list`.
//!
//! ## Pipeline
//! ```text
//!   terminal width ──► style overhead ──► content width
//!                                              │
//!   column kinds ──► proportional allocator ◄──┘
//!                              │
//!   observed content widths ──► cap-and-redistribute ──► WidthPlan
//! ```
//!
//! The computation is pure and total: every input maps to a plan, nothing
//! here returns an error. Only table rendering uses it; CSV, HTML and
//! Markdown never call in.

mod allocate;
mod overhead;
mod probe;
mod redistribute;

pub use allocate::{base_weight, distribute_widths, MIN_COLUMN_WIDTH};
pub use overhead::{content_width_for_style, max_separator_width, table_row_overhead};
pub use probe::{
    detect_terminal_width, resolve_terminal_width, stdout_width, TerminalSink, TerminalWidth,
    COLUMNS_ENV, DEFAULT_TERMINAL_WIDTH,
};
pub use redistribute::cap_and_redistribute;

use crate::error::{PdaError, Result};
use crate::render::text::longest_line_width;
use crate::render::{TableStyle, WrapPolicy};

// =============================================================================
// Columns
// =============================================================================

/// A column `list` can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Key,
    Value,
    Ttl,
}

impl ColumnKind {
    /// Header label
    pub fn label(self) -> &'static str {
        match self {
            ColumnKind::Key => "Key",
            ColumnKind::Value => "Value",
            ColumnKind::Ttl => "TTL",
        }
    }
}

/// The selected columns, always in Key, Value, TTL order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    kinds: Vec<ColumnKind>,
}

impl ColumnSet {
    /// Build from the column toggles; selecting nothing is an error
    pub fn select(key: bool, value: bool, ttl: bool) -> Result<Self> {
        let kinds: Vec<ColumnKind> = [
            (key, ColumnKind::Key),
            (value, ColumnKind::Value),
            (ttl, ColumnKind::Ttl),
        ]
        .into_iter()
        .filter_map(|(on, kind)| on.then_some(kind))
        .collect();

        if kinds.is_empty() {
            return Err(PdaError::NoColumns);
        }
        Ok(Self { kinds })
    }

    pub fn kinds(&self) -> &[ColumnKind] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn contains(&self, kind: ColumnKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn header_cells(&self) -> Vec<&'static str> {
        self.kinds.iter().map(|k| k.label()).collect()
    }
}

// =============================================================================
// Observed content
// =============================================================================

/// Widest rendered line seen so far in each column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentWidths {
    widths: Vec<usize>,
}

impl ContentWidths {
    pub fn new(columns: usize) -> Self {
        Self {
            widths: vec![0; columns],
        }
    }

    /// Fold one row (or the header) into the maxima
    pub fn observe<S: AsRef<str>>(&mut self, cells: &[S]) {
        for (max, cell) in self.widths.iter_mut().zip(cells) {
            *max = (*max).max(longest_line_width(cell.as_ref()));
        }
    }

    pub fn get(&self, index: usize) -> usize {
        self.widths.get(index).copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.widths
    }
}

// =============================================================================
// Plan
// =============================================================================

/// Final content width per column, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthPlan {
    pub widths: Vec<usize>,
    /// Width of the whole rendered row, furniture included
    pub total_width: usize,
}

impl WidthPlan {
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Sum of the content widths
    pub fn content_total(&self) -> usize {
        self.widths.iter().sum()
    }
}

/// The renderer settings the layout engine drives
pub trait LayoutTarget {
    fn style(&self) -> &TableStyle;
    fn set_column_width(&mut self, index: usize, max: usize);
    fn set_wrap_policy(&mut self, index: usize, policy: WrapPolicy);
    fn set_max_total_row_width(&mut self, width: usize);
}

/// Compute the plan for a render `total_width` columns wide
pub fn plan_widths(
    total_width: usize,
    style: &TableStyle,
    columns: &ColumnSet,
    content: &ContentWidths,
) -> WidthPlan {
    let total_width = if total_width == 0 {
        DEFAULT_TERMINAL_WIDTH
    } else {
        total_width
    };
    let content_width = content_width_for_style(total_width, style, columns.len());
    let proportional = distribute_widths(content_width, columns.kinds());
    let widths = cap_and_redistribute(proportional, content.as_slice(), content_width);

    tracing::debug!(
        total_width,
        content_width,
        style = style.name,
        ?widths,
        "planned column widths"
    );

    WidthPlan {
        widths,
        total_width,
    }
}

/// Plan widths and apply them to the render target
pub fn apply_column_constraints<T: LayoutTarget + ?Sized>(
    target: &mut T,
    columns: &ColumnSet,
    total_width: usize,
    content: &ContentWidths,
) -> WidthPlan {
    let plan = plan_widths(total_width, target.style(), columns, content);
    for (idx, width) in plan.widths.iter().enumerate() {
        target.set_column_width(idx, *width);
        target.set_wrap_policy(idx, WrapPolicy::SoftPreserveBreaks);
    }
    target.set_max_total_row_width(plan.total_width);
    plan
}
