//! Top processes table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::process::ProcessTable;
use crate::tui::style::Styles;

/// Renders the ranked process table. Rows past the bottom edge are cut off.
pub fn render_processes(frame: &mut Frame, area: Rect, table: &ProcessTable) {
    let header = Row::new(ProcessTable::HEADER.map(Cell::from)).style(Styles::table_header());
    let rows = table.rows.iter().map(|row| {
        Row::new([
            Cell::from(row.name.clone()),
            Cell::from(row.cpu.clone()),
            Cell::from(row.memory.clone()),
            Cell::from(row.command.clone()),
        ])
    });
    let widths = table.widths.as_array().map(Constraint::Length);

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(0)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border())
                .title(Span::styled("Top Processes", Styles::title())),
        );
    frame.render_widget(widget, area);
}
