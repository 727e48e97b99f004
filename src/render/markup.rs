//! CSV, HTML and Markdown rendering. Cell text is emitted in full.

use std::io::Write;

use crate::error::Result;

use super::TableWriter;

pub(super) fn render_csv<W: Write + ?Sized>(writer: &TableWriter, out: &mut W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(out);
    if let Some(header) = writer.header() {
        csv.write_record(header)?;
    }
    for row in writer.rows() {
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub(super) fn render_html<W: Write + ?Sized>(writer: &TableWriter, out: &mut W) -> Result<()> {
    writeln!(out, "<table class=\"pda-table\">")?;
    if let Some(header) = writer.header() {
        writeln!(out, "  <thead>")?;
        write_html_row(out, "th", header)?;
        writeln!(out, "  </thead>")?;
    }
    writeln!(out, "  <tbody>")?;
    for row in writer.rows() {
        write_html_row(out, "td", row)?;
    }
    writeln!(out, "  </tbody>")?;
    writeln!(out, "</table>")?;
    Ok(())
}

fn write_html_row<W: Write + ?Sized>(out: &mut W, tag: &str, cells: &[String]) -> Result<()> {
    writeln!(out, "  <tr>")?;
    for cell in cells {
        writeln!(out, "    <{tag}>{}</{tag}>", escape_html(cell))?;
    }
    writeln!(out, "  </tr>")?;
    Ok(())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\n' => escaped.push_str("<br/>"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub(super) fn render_markdown<W: Write + ?Sized>(writer: &TableWriter, out: &mut W) -> Result<()> {
    let count = writer.column_count();
    if count == 0 {
        return Ok(());
    }

    if let Some(header) = writer.header() {
        write_markdown_row(out, header, count)?;
        let rule = vec!["---"; count].join(" | ");
        writeln!(out, "| {} |", rule)?;
    }
    for row in writer.rows() {
        write_markdown_row(out, row, count)?;
    }
    Ok(())
}

fn write_markdown_row<W: Write + ?Sized>(out: &mut W, cells: &[String], count: usize) -> Result<()> {
    let cells: Vec<String> = (0..count)
        .map(|i| escape_markdown(cells.get(i).map(String::as_str).unwrap_or("")))
        .collect();
    writeln!(out, "| {} |", cells.join(" | "))?;
    Ok(())
}

fn escape_markdown(text: &str) -> String {
    text.replace('\r', "")
        .replace('|', "\\|")
        .replace('\n', "<br/>")
}
