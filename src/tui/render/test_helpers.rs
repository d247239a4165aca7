use std::collections::BTreeSet;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use uuid::Uuid;

use crate::model::column::ColumnSpec;
use crate::model::style::StyleRule;
use crate::ops::report::{ReportRow, ReportView};

/// Render into an in-memory buffer and return it with styles intact.
pub fn render_to_buffer<F>(w: u16, h: u16, f: F) -> Buffer
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let buf = render_to_buffer(w, h, f);
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Two rows under ID, Project and Description; the first is bold red.
pub fn sample_report() -> ReportView {
    let columns = ColumnSpec::from_report(
        &["id".into(), "project".into(), "description".into()],
        &["ID".into()],
    );
    ReportView {
        name: "next".into(),
        columns,
        rows: vec![
            row(
                1,
                &["1", "home", "take out the trash"],
                StyleRule {
                    bold: Some(true),
                    ..StyleRule::fg(1)
                },
            ),
            row(2, &["12", "garden.beds", "water the tomatoes"], StyleRule::default()),
        ],
    }
}

fn row(uuid: u128, cells: &[&str], style: StyleRule) -> ReportRow {
    ReportRow {
        uuid: Uuid::from_u128(uuid),
        cells: cells.iter().map(|c| c.to_string()).collect(),
        style,
        virtual_tags: BTreeSet::new(),
    }
}
