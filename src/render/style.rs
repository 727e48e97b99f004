//! Table styles.
//!
//! A style is plain data: the glyphs drawn around and between cells, and
//! which of them are drawn at all. The layout engine reads it to work out
//! how many columns the furniture costs.

use console::Style;

/// Glyphs used to draw a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxGlyphs {
    pub padding_left: String,
    pub padding_right: String,

    pub top_left: String,
    pub top_right: String,
    pub top_separator: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub bottom_separator: String,

    /// Outer border on data rows
    pub left: String,
    pub right: String,

    /// Ends of a horizontal rule
    pub left_separator: String,
    pub right_separator: String,

    pub middle_horizontal: String,
    /// Junction of a horizontal rule and a column separator
    pub middle_separator: String,
    /// Column separator on data rows
    pub middle_vertical: String,
    /// Separator used where a cell is absent
    pub empty_separator: String,
}

/// Which parts of the furniture are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOptions {
    pub draw_border: bool,
    pub separate_columns: bool,
    pub separate_header: bool,
    pub separate_rows: bool,
    pub upper_header: bool,
}

/// A complete table style
#[derive(Debug, Clone)]
pub struct TableStyle {
    pub name: &'static str,
    pub glyphs: BoxGlyphs,
    pub options: StyleOptions,
    /// Applied to each padded header cell
    pub header: Option<Style>,
}

impl TableStyle {
    /// Padded cells, no borders or separators, black-on-green header.
    pub fn colored() -> Self {
        Self {
            name: "colored",
            glyphs: BoxGlyphs::ascii(),
            options: StyleOptions {
                draw_border: false,
                separate_columns: false,
                separate_header: false,
                separate_rows: false,
                upper_header: true,
            },
            header: Some(Style::new().black().on_green()),
        }
    }

    /// Light box-drawing borders with column and header separators.
    pub fn light() -> Self {
        Self {
            name: "light",
            glyphs: BoxGlyphs {
                padding_left: " ".into(),
                padding_right: " ".into(),
                top_left: "┌".into(),
                top_right: "┐".into(),
                top_separator: "┬".into(),
                bottom_left: "└".into(),
                bottom_right: "┘".into(),
                bottom_separator: "┴".into(),
                left: "│".into(),
                right: "│".into(),
                left_separator: "├".into(),
                right_separator: "┤".into(),
                middle_horizontal: "─".into(),
                middle_separator: "┼".into(),
                middle_vertical: "│".into(),
                empty_separator: " ".into(),
            },
            options: StyleOptions {
                draw_border: true,
                separate_columns: true,
                separate_header: true,
                separate_rows: false,
                upper_header: true,
            },
            header: None,
        }
    }

    /// ASCII borders and separators.
    pub fn ascii() -> Self {
        Self {
            name: "ascii",
            glyphs: BoxGlyphs::ascii(),
            options: StyleOptions {
                draw_border: true,
                separate_columns: true,
                separate_header: true,
                separate_rows: false,
                upper_header: true,
            },
            header: None,
        }
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::colored()
    }
}

impl BoxGlyphs {
    pub fn ascii() -> Self {
        Self {
            padding_left: " ".into(),
            padding_right: " ".into(),
            top_left: "+".into(),
            top_right: "+".into(),
            top_separator: "+".into(),
            bottom_left: "+".into(),
            bottom_right: "+".into(),
            bottom_separator: "+".into(),
            left: "|".into(),
            right: "|".into(),
            left_separator: "+".into(),
            right_separator: "+".into(),
            middle_horizontal: "-".into(),
            middle_separator: "+".into(),
            middle_vertical: "|".into(),
            empty_separator: " ".into(),
        }
    }
}
