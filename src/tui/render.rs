//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::Rect;

use super::state::Dashboard;
use super::widgets::{
    render_cpu_gauges, render_cpu_title, render_disk, render_footer, render_header,
    render_network, render_processes,
};

/// Clips `area` to the frame, `None` if nothing of it is visible.
fn visible(frame: &Frame, area: Rect) -> Option<Rect> {
    let clipped = area.intersection(frame.area());
    (!clipped.is_empty()).then_some(clipped)
}

/// Main render function.
///
/// Sections are placed at the absolute positions computed by the layout;
/// whatever falls below the terminal edge is not drawn.
pub fn render(frame: &mut Frame, dashboard: &Dashboard) {
    let layout = dashboard.layout();
    let span = dashboard.history_span_secs();

    if let Some(area) = visible(frame, layout.header) {
        render_header(frame, area, dashboard.header());
    }
    if let Some(area) = visible(frame, layout.cpu_title) {
        render_cpu_title(frame, area, dashboard.gauges().cores());
    }
    render_cpu_gauges(
        frame,
        layout.average_gauge,
        &layout.core_gauges,
        dashboard.gauges(),
    );

    if let Some(stats) = visible(frame, layout.network_stats) {
        let graph = visible(frame, layout.network_graph).unwrap_or_default();
        render_network(
            frame,
            stats,
            graph,
            dashboard.network_text(),
            dashboard.network(),
            span,
        );
    }

    if let Some(stats) = visible(frame, layout.disk_stats) {
        let graph = visible(frame, layout.disk_graph).unwrap_or_default();
        render_disk(
            frame,
            stats,
            graph,
            dashboard.disk_text(),
            dashboard.disk(),
            span,
        );
    }

    if let Some(area) = visible(frame, layout.processes) {
        render_processes(frame, area, dashboard.process_table());
    }
    if let Some(area) = visible(frame, layout.footer) {
        render_footer(frame, area);
    }
}
