//! Plain-text rendering of the custom table variant.

use super::{PaginationBar, ERROR_TEXT, LOADING_TEXT};
use crate::board::{BoardView, ViewModel};
use crate::record::Record;
use std::fmt::Write;

const COLUMN_GAP: &str = "  ";

pub fn render(view: &BoardView) -> String {
    match view {
        BoardView::Loading => LOADING_TEXT.to_string(),
        BoardView::Failed { .. } => ERROR_TEXT.to_string(),
        BoardView::Ready(model) => render_model(model),
    }
}

fn cell_text(record: &Record, field: &str) -> String {
    record
        .get(field)
        .filter(|value| !value.is_null())
        .map(|value| value.display_string())
        .unwrap_or_default()
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

pub fn render_model(model: &ViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", model.header_text);

    let mut controls: Vec<String> = model
        .filters
        .iter()
        .map(|f| format!("{}: {}", f.label, f.selected.as_deref().unwrap_or("All")))
        .collect();
    controls.push(format!("Search: {}", model.search.as_deref().unwrap_or("")));
    let _ = writeln!(out, "{}", controls.join(" | ").trim_end());

    let rows: Vec<Vec<String>> = model
        .page
        .records
        .iter()
        .map(|record| {
            model
                .columns
                .iter()
                .map(|col| cell_text(record, &col.field))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = model
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let header = if model.header_visible {
                col.label.chars().count()
            } else {
                0
            };
            rows.iter()
                .map(|row| row[i].chars().count())
                .fold(header, usize::max)
        })
        .collect();

    if model.header_visible && !model.columns.is_empty() {
        let header: Vec<String> = model
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, &w)| pad(&col.label, w))
            .collect();
        let _ = writeln!(out, "{}", header.join(COLUMN_GAP).trim_end());
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        let _ = writeln!(out, "{}", rule.join(COLUMN_GAP));
    }

    for row in &rows {
        let cells: Vec<String> = row.iter().zip(&widths).map(|(c, &w)| pad(c, w)).collect();
        let _ = writeln!(out, "{}", cells.join(COLUMN_GAP).trim_end());
    }

    out.push_str(&render_pagination(&PaginationBar::from_view_model(model)));
    out
}

/// `Showing 20 out of 45   < [1] 2 3 >`. Disabled arrows are drawn as `.`.
pub fn render_pagination(bar: &PaginationBar) -> String {
    let pages: Vec<String> = bar
        .pages
        .iter()
        .map(|p| {
            if p.current {
                format!("[{}]", p.number)
            } else {
                p.number.to_string()
            }
        })
        .collect();

    let mut controls = vec![if bar.prev_enabled { "<" } else { "." }.to_string()];
    controls.extend(pages);
    controls.push(if bar.next_enabled { ">" } else { "." }.to_string());

    format!(
        "Showing {} out of {}   {}\n",
        bar.page_size,
        bar.total,
        controls.join(" ")
    )
}
