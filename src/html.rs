//! HTML rendering of chat answers.
//!
//! Turns a [`DisplayPayload`] into the fragment the chat page inserts
//! into an assistant bubble. The two table layouts differ: the grid
//! gets a header row with a blank corner cell, the count table is a
//! plain two-column body with right-aligned values (handled in CSS).

use crate::format::{DisplayPayload, ParsedTable, TableFormat, TableRow};

/// Escape text for inclusion in HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a display payload as an HTML fragment.
///
/// Plain text is escaped and returned as-is; tables become `<table>`
/// markup with the layout class matching their format.
pub fn render_payload(payload: &DisplayPayload) -> String {
    match payload {
        DisplayPayload::Text(text) => escape(text),
        DisplayPayload::Table { format, table } => match format {
            TableFormat::GridTable => render_grid_table(table),
            _ => render_count_table(table),
        },
    }
}

fn render_count_table(table: &ParsedTable) -> String {
    let mut out = String::from("<table class=\"count-table\"><tbody>");
    for row in &table.rows {
        push_row(&mut out, row);
    }
    out.push_str("</tbody></table>");
    out
}

fn render_grid_table(table: &ParsedTable) -> String {
    let mut out = String::from("<table class=\"grid-table\">");

    if let Some(header) = &table.header {
        out.push_str("<thead><tr>");
        for cell in header {
            out.push_str("<th>");
            out.push_str(&escape(cell));
            out.push_str("</th>");
        }
        out.push_str("</tr></thead>");
    }

    out.push_str("<tbody>");
    for row in &table.rows {
        push_row(&mut out, row);
    }
    out.push_str("</tbody></table>");
    out
}

fn push_row(out: &mut String, row: &TableRow) {
    if row.emphasized {
        out.push_str("<tr class=\"emphasis\">");
    } else {
        out.push_str("<tr>");
    }
    for cell in &row.cells {
        out.push_str("<td>");
        out.push_str(&escape(cell));
        out.push_str("</td>");
    }
    out.push_str("</tr>");
}
