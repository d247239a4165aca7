pub mod render;
pub mod theme;

use std::io::{self, Write};

use ratatui::backend::CrosstermBackend;
use ratatui::{Terminal, TerminalOptions, Viewport};

use crate::ops::report::ReportView;

pub use render::plain::render_plain;
pub use render::render_report;

/// Rows the inline table needs: one header plus one per task
pub fn report_height(report: &ReportView) -> u16 {
    u16::try_from(report.rows.len() + 1).unwrap_or(u16::MAX)
}

/// Print a styled report into the terminal below the cursor.
///
/// Returns `Ok(false)` without drawing when the report is taller than the
/// screen, so the caller can fall back to [`render_plain`].
pub fn print_report(report: &ReportView, color: bool) -> io::Result<bool> {
    let (_, screen_height) = crossterm::terminal::size()?;
    let height = report_height(report);
    if height >= screen_height {
        tracing::debug!(height, screen_height, "report taller than the terminal");
        return Ok(false);
    }

    let mut stdout = io::stdout();
    {
        let backend = CrosstermBackend::new(&mut stdout);
        let mut terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        terminal.draw(|frame| {
            let area = frame.area();
            render_report(frame, report, area, color);
        })?;
    }
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(true)
}
