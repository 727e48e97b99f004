//! Proportional allocator.
//!
//! Splits a content budget between columns by a fixed per-kind weight,
//! flooring every column at `MIN_COLUMN_WIDTH`.

use super::ColumnKind;

/// Narrowest width a column is ever given by the allocator
pub const MIN_COLUMN_WIDTH: usize = 10;

/// Budget assumed when the caller passes zero
const FALLBACK_TOTAL: usize = 100;

/// Relative weight of a column kind; Value yields a quarter to TTL when both are shown
pub fn base_weight(kind: ColumnKind, has_ttl: bool) -> f64 {
    match kind {
        ColumnKind::Key => 0.25,
        ColumnKind::Value if has_ttl => 0.5,
        ColumnKind::Value => 0.75,
        ColumnKind::Ttl => 0.25,
    }
}

/// Initial width per column.
///
/// Each column gets `floor(weight / sum * total)`, raised to the minimum.
/// Whatever the floors leave unallocated is handed out one column at a
/// time, left to right, so the result sums to `total` unless the minimums
/// alone exceed it.
pub fn distribute_widths(total: usize, columns: &[ColumnKind]) -> Vec<usize> {
    let total = if total == 0 { FALLBACK_TOTAL } else { total };
    let has_ttl = columns.contains(&ColumnKind::Ttl);

    let weights: Vec<f64> = columns.iter().map(|c| base_weight(*c, has_ttl)).collect();
    let mut sum: f64 = weights.iter().sum();
    if sum == 0.0 {
        sum = 1.0;
    }

    let mut widths: Vec<usize> = weights
        .iter()
        .map(|w| (((w / sum) * total as f64) as usize).max(MIN_COLUMN_WIDTH))
        .collect();

    let used: usize = widths.iter().sum();
    let mut remaining = total.saturating_sub(used);
    let mut idx = 0;
    while remaining > 0 && !widths.is_empty() {
        widths[idx % columns.len()] += 1;
        remaining -= 1;
        idx += 1;
    }
    widths
}
