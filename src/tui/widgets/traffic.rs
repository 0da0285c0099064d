//! Network and disk panels: a stats box above a two-series history chart.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use crate::history::DualHistory;
use crate::tui::style::Styles;

fn bordered(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .title(Span::styled(title, Styles::title()))
}

/// Labels and styles for one chart.
struct ChartLabels {
    title: String,
    primary_label: String,
    primary_style: Style,
    secondary_label: String,
    secondary_style: Style,
}

fn render_chart(frame: &mut Frame, area: Rect, history: &DualHistory, labels: ChartLabels) {
    let inner = usize::from(area.width.saturating_sub(2));
    let primary = history.primary.tail_points(inner);
    let secondary = history.secondary.tail_points(inner);
    let x_max = (primary.len().max(1) - 1).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name(labels.primary_label)
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(labels.primary_style)
            .data(&primary),
        Dataset::default()
            .name(labels.secondary_label)
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(labels.secondary_style)
            .data(&secondary),
    ];

    let chart = Chart::new(datasets)
        .block(bordered(labels.title))
        .x_axis(Axis::default().bounds([0.0, x_max]))
        .y_axis(
            Axis::default()
                .style(Styles::dim())
                .bounds([0.0, history.scale.current_max()]),
        );
    frame.render_widget(chart, area);
}

/// Renders network stats text and the receive/transmit history.
pub fn render_network(
    frame: &mut Frame,
    stats_area: Rect,
    graph_area: Rect,
    text: &str,
    history: &DualHistory,
    span_secs: u64,
) {
    frame.render_widget(
        Paragraph::new(text.to_string()).block(bordered("Network".to_string())),
        stats_area,
    );
    let rx = history.primary.latest().unwrap_or(0.0);
    let tx = history.secondary.latest().unwrap_or(0.0);
    let labels = ChartLabels {
        title: format!(
            "Network Traffic History (last ~{span_secs} seconds) - Max: {:.1} Mbps",
            history.scale.current_max()
        ),
        primary_label: format!("In ({rx:.1} Mbps)"),
        primary_style: Styles::net_rx(),
        secondary_label: format!("Out ({tx:.1} Mbps)"),
        secondary_style: Styles::net_tx(),
    };
    render_chart(frame, graph_area, history, labels);
}

/// Renders per-device disk stats and the aggregate read/write history.
pub fn render_disk(
    frame: &mut Frame,
    stats_area: Rect,
    graph_area: Rect,
    text: &str,
    history: &DualHistory,
    span_secs: u64,
) {
    frame.render_widget(
        Paragraph::new(text.to_string()).block(bordered("Disk I/O".to_string())),
        stats_area,
    );
    let read = history.primary.latest().unwrap_or(0.0);
    let write = history.secondary.latest().unwrap_or(0.0);
    let labels = ChartLabels {
        title: format!(
            "Disk I/O History (last ~{span_secs} seconds) - Max: {:.2} MB/s",
            history.scale.current_max()
        ),
        primary_label: format!("Read ({read:.2} MB/s)"),
        primary_style: Styles::disk_read(),
        secondary_label: format!("Write ({write:.2} MB/s)"),
        secondary_style: Styles::disk_write(),
    };
    render_chart(frame, graph_area, history, labels);
}
