//! Style overhead: the columns a table style spends on padding, separators
//! and borders rather than cell content.

use crate::render::text::display_width;
use crate::render::TableStyle;

/// Furniture width of one rendered row with `column_count` columns.
///
/// Separators are charged at the widest glyph the style defines for any
/// separator role, since a row boundary may use any of them.
pub fn table_row_overhead(style: &TableStyle, column_count: usize) -> usize {
    if column_count == 0 {
        return 0;
    }
    let glyphs = &style.glyphs;

    let padding = display_width(&format!("{}{}", glyphs.padding_left, glyphs.padding_right));
    let mut overhead = padding * column_count;

    if style.options.separate_columns && column_count > 1 {
        overhead += (column_count - 1) * max_separator_width(style);
    }
    if style.options.draw_border {
        overhead += display_width(&format!("{}{}", glyphs.left, glyphs.right));
    }
    overhead
}

/// Widest glyph among every separator role of the style
pub fn max_separator_width(style: &TableStyle) -> usize {
    let glyphs = &style.glyphs;
    [
        &glyphs.middle_separator,
        &glyphs.empty_separator,
        &glyphs.middle_horizontal,
        &glyphs.top_separator,
        &glyphs.bottom_separator,
        &glyphs.middle_vertical,
        &glyphs.left_separator,
        &glyphs.right_separator,
    ]
    .iter()
    .map(|sep| display_width(sep))
    .max()
    .unwrap_or(0)
}

/// Width left for cell content, never less than one column per column
pub fn content_width_for_style(total_width: usize, style: &TableStyle, column_count: usize) -> usize {
    if column_count == 0 {
        return total_width;
    }
    total_width
        .saturating_sub(table_row_overhead(style, column_count))
        .max(column_count)
}
