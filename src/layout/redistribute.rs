//! Cap-and-redistribute pass.
//!
//! Clamps every column to the widest content it has been seen to hold, then
//! gives the freed budget back one column at a time to columns that can
//! still use it.

/// Final widths from the proportional ones.
///
/// `caps[i] == 0` (or a missing entry) means nothing was observed for
/// column `i`; such a column is never clamped and always accepts more.
/// When every column has reached its cap the loop stops with budget left
/// over, and the table is simply narrower than the terminal.
pub fn cap_and_redistribute(mut widths: Vec<usize>, caps: &[usize], content_width: usize) -> Vec<usize> {
    let cap_of = |idx: usize| caps.get(idx).copied().unwrap_or(0);

    let mut used = 0;
    for (idx, width) in widths.iter_mut().enumerate() {
        let cap = cap_of(idx);
        if cap > 0 && *width > cap {
            *width = cap;
        }
        *width = (*width).max(1);
        used += *width;
    }

    let mut remaining = content_width.saturating_sub(used);
    while remaining > 0 {
        let mut progressed = false;
        for (idx, width) in widths.iter_mut().enumerate() {
            let cap = cap_of(idx);
            if cap > 0 && *width >= cap {
                continue;
            }
            *width += 1;
            remaining -= 1;
            progressed = true;
            if remaining == 0 {
                break;
            }
        }
        if !progressed {
            break;
        }
    }

    widths
}
