//! Fixed-width table rendering.

use std::io::Write;

use console::{pad_str, Alignment};

use crate::error::Result;

use super::text::{display_width, truncate_line, wrap_text};
use super::{TableStyle, TableWriter, WrapPolicy};

/// One logical row broken into its physical lines, per column
type Block = Vec<Vec<String>>;

pub(super) fn render_table<W: Write + ?Sized>(writer: &TableWriter, out: &mut W) -> Result<()> {
    let count = writer.column_count();
    if count == 0 {
        return Ok(());
    }
    let style = writer.table_style();

    let header = writer.header().map(|cells| {
        let cells: Vec<String> = if style.options.upper_header {
            cells.iter().map(|c| c.to_uppercase()).collect()
        } else {
            cells.to_vec()
        };
        split_cells(writer, &cells, count)
    });
    let rows: Vec<Block> = writer
        .rows()
        .iter()
        .map(|row| split_cells(writer, row, count))
        .collect();

    let mut widths = vec![0usize; count];
    for block in header.iter().chain(rows.iter()) {
        for (i, lines) in block.iter().enumerate() {
            for line in lines {
                widths[i] = widths[i].max(display_width(line));
            }
        }
    }

    let glyphs = &style.glyphs;
    let mut lines = Vec::new();

    if style.options.draw_border {
        lines.push(rule(
            style,
            &widths,
            &glyphs.top_left,
            &glyphs.top_separator,
            &glyphs.top_right,
        ));
    }
    if let Some(block) = &header {
        push_block(&mut lines, style, &widths, block, true);
        if style.options.separate_header {
            lines.push(rule(
                style,
                &widths,
                &glyphs.left_separator,
                &glyphs.middle_separator,
                &glyphs.right_separator,
            ));
        }
    }
    for (i, block) in rows.iter().enumerate() {
        if i > 0 && style.options.separate_rows {
            lines.push(rule(
                style,
                &widths,
                &glyphs.left_separator,
                &glyphs.middle_separator,
                &glyphs.right_separator,
            ));
        }
        push_block(&mut lines, style, &widths, block, false);
    }
    if style.options.draw_border {
        lines.push(rule(
            style,
            &widths,
            &glyphs.bottom_left,
            &glyphs.bottom_separator,
            &glyphs.bottom_right,
        ));
    }

    for line in lines {
        let line = match writer.allowed_row_length() {
            Some(max) => truncate_line(&line, max),
            None => line,
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn split_cells(writer: &TableWriter, cells: &[String], count: usize) -> Block {
    (0..count)
        .map(|i| {
            let text = cells.get(i).map(String::as_str).unwrap_or("");
            let config = writer.column_config(i);
            match config.wrap {
                WrapPolicy::SoftPreserveBreaks if config.width_max > 0 => {
                    wrap_text(text, config.width_max)
                }
                _ => wrap_text(text, 0),
            }
        })
        .collect()
}

fn push_block(
    lines: &mut Vec<String>,
    style: &TableStyle,
    widths: &[usize],
    block: &Block,
    is_header: bool,
) {
    let glyphs = &style.glyphs;
    let height = block.iter().map(Vec::len).max().unwrap_or(0).max(1);

    for row in 0..height {
        let cells: Vec<String> = block
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let text = cell.get(row).map(String::as_str).unwrap_or("");
                let padded = format!(
                    "{}{}{}",
                    glyphs.padding_left,
                    pad_str(text, *width, Alignment::Left, None),
                    glyphs.padding_right
                );
                match (&style.header, is_header) {
                    (Some(header_style), true) => header_style.apply_to(padded).to_string(),
                    _ => padded,
                }
            })
            .collect();

        let joiner = if style.options.separate_columns {
            glyphs.middle_vertical.as_str()
        } else {
            ""
        };
        let body = cells.join(joiner);
        if style.options.draw_border {
            lines.push(format!("{}{}{}", glyphs.left, body, glyphs.right));
        } else {
            lines.push(body);
        }
    }
}

/// A horizontal rule spanning every column
fn rule(style: &TableStyle, widths: &[usize], left: &str, junction: &str, right: &str) -> String {
    let glyphs = &style.glyphs;
    let padding = display_width(&glyphs.padding_left) + display_width(&glyphs.padding_right);
    let horizontal = if glyphs.middle_horizontal.is_empty() {
        " "
    } else {
        glyphs.middle_horizontal.as_str()
    };

    let segments: Vec<String> = widths
        .iter()
        .map(|w| horizontal.repeat(w + padding))
        .collect();
    let joiner = if style.options.separate_columns {
        junction
    } else {
        ""
    };
    let body = segments.join(joiner);
    if style.options.draw_border {
        format!("{}{}{}", left, body, right)
    } else {
        body
    }
}
