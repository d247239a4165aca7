use crate::model::column::Column;
use crate::ops::report::ReportView;
use crate::util::unicode::{display_width, pad_to_width, truncate_to_width};

/// Lay a report out as aligned text without escape codes, for pipes and files.
///
/// Description cells are cut to `description_width` cells. Every line ends
/// with a newline and carries no trailing padding.
pub fn render_plain(report: &ReportView, description_width: usize) -> String {
    let clip = |col: usize, text: &str| -> String {
        match report.columns.get(col) {
            Some(spec) if spec.column == Column::Description => {
                truncate_to_width(text, description_width)
            }
            _ => text.to_string(),
        }
    };

    let header: Vec<String> = report.columns.iter().map(|c| c.label.clone()).collect();
    let body: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .enumerate()
                .map(|(i, cell)| clip(i, cell))
                .collect()
        })
        .collect();

    plain_table(&header, &body)
}

/// Align rows of cells under a header, padding every column but the last.
pub fn plain_table(header: &[String], body: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| display_width(h)).collect();
    for cells in body {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(display_width(cell));
        }
    }

    let mut out = String::new();
    for cells in std::iter::once(header).chain(body.iter().map(Vec::as_slice)) {
        let last = cells.len().saturating_sub(1);
        let line = cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &width))| {
                if i == last {
                    cell.clone()
                } else {
                    pad_to_width(cell, width)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
