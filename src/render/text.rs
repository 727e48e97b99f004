//! Text measurement and wrapping.
//!
//! Widths are display columns, not bytes: ANSI escape sequences count as
//! zero and wide characters count as two.

use std::mem;

use console::AnsiCodeIterator;
use unicode_width::UnicodeWidthChar;

/// Display width of a single-line string, ignoring ANSI escape codes.
pub fn display_width(s: &str) -> usize {
    console::measure_text_width(s)
}

/// Display width of the longest line in a possibly multi-line string.
pub fn longest_line_width(s: &str) -> usize {
    s.split('\n')
        .map(|line| display_width(line.strip_suffix('\r').unwrap_or(line)))
        .max()
        .unwrap_or(0)
}

/// Soft-wrap `text` so no line is wider than `width`.
///
/// Existing line breaks are kept. Lines break at spaces where possible; a
/// word wider than `width` is broken mid-word. ANSI escape sequences are
/// zero-width and never split. A single character wider than `width` still
/// takes a line of its own. A `width` of zero disables wrapping.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if width == 0 || display_width(line) <= width {
            out.push(line.to_string());
        } else {
            wrap_line(&units(line), width, &mut out);
        }
    }
    out
}

/// Smallest unbreakable piece of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit<'a> {
    Ansi(&'a str),
    Char(char),
}

impl Unit<'_> {
    fn width(self) -> usize {
        match self {
            Unit::Ansi(_) => 0,
            Unit::Char(ch) => ch.width().unwrap_or(0),
        }
    }

    fn push_to(self, buf: &mut String) {
        match self {
            Unit::Ansi(code) => buf.push_str(code),
            Unit::Char(ch) => buf.push(ch),
        }
    }
}

fn units(line: &str) -> Vec<Unit<'_>> {
    let mut units = Vec::new();
    for (part, is_ansi) in AnsiCodeIterator::new(line) {
        if is_ansi {
            units.push(Unit::Ansi(part));
        } else {
            units.extend(part.chars().map(Unit::Char));
        }
    }
    units
}

fn wrap_line(line: &[Unit<'_>], width: usize, out: &mut Vec<String>) {
    let start = out.len();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split(|unit| *unit == Unit::Char(' ')) {
        let word_width: usize = word.iter().map(|unit| unit.width()).sum();
        let gap = usize::from(!current.is_empty());

        if current_width + gap + word_width <= width {
            if gap == 1 {
                current.push(' ');
            }
            word.iter().for_each(|unit| unit.push_to(&mut current));
            current_width += gap + word_width;
            continue;
        }

        if !current.is_empty() {
            out.push(mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            word.iter().for_each(|unit| unit.push_to(&mut current));
            current_width = word_width;
            continue;
        }

        for unit in word {
            let unit_width = unit.width();
            if unit_width > 0 && current_width + unit_width > width && current_width > 0 {
                out.push(mem::take(&mut current));
                current_width = 0;
            }
            unit.push_to(&mut current);
            current_width += unit_width;
        }
    }

    if !current.is_empty() || out.len() == start {
        out.push(current);
    }
}

/// Cut a rendered line down to `max` display columns, marking the cut with `~`.
pub fn truncate_line(line: &str, max: usize) -> String {
    if display_width(line) <= max {
        return line.to_string();
    }
    console::truncate_str(line, max, "~").into_owned()
}
