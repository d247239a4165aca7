pub mod plain;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Cell, Row, Table};

use crate::ops::report::ReportView;
use crate::util::unicode;

use super::theme::{header_style, to_ratatui_style};

/// Widest cell per column, headers included
pub fn column_widths(report: &ReportView) -> Vec<usize> {
    let mut widths: Vec<usize> = report
        .columns
        .iter()
        .map(|c| unicode::display_width(&c.label))
        .collect();
    for row in &report.rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(unicode::display_width(cell));
        }
    }
    widths
}

/// Draw a report as a table, one styled row per task
pub fn render_report(frame: &mut Frame, report: &ReportView, area: Rect, color: bool) {
    let widths: Vec<Constraint> = column_widths(report)
        .into_iter()
        .map(|w| Constraint::Length(w as u16))
        .collect();

    let header = Row::new(report.headers().into_iter().map(Cell::from)).style(header_style());

    let rows = report.rows.iter().map(|row| {
        let style = if color {
            to_ratatui_style(&row.style)
        } else {
            Style::default()
        };
        Row::new(row.cells.iter().map(|c| Cell::from(c.as_str()))).style(style)
    });

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    frame.render_widget(table, area);
}
