//! CPU section: title line, average gauge and the per-core grid.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::gauge::{CpuGauges, GaugeAnimator};
use crate::tui::style::Styles;

fn gauge_widget(title: String, gauge: &GaugeAnimator) -> Gauge<'static> {
    let percent = gauge.percent();
    Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border())
                .title(Span::styled(title, Styles::title())),
        )
        .gauge_style(Styles::severity(gauge.severity()))
        .percent(percent)
        .label(format!("{percent}%"))
}

pub fn render_cpu_title(frame: &mut Frame, area: Rect, cores: usize) {
    let title = Paragraph::new(format!("CPU Utilization ({cores} cores)")).style(Styles::title());
    frame.render_widget(title, area);
}

/// Renders the average gauge and one gauge per core.
///
/// `core_areas` is parallel to the cores; rects outside the frame are
/// skipped.
pub fn render_cpu_gauges(
    frame: &mut Frame,
    average_area: Rect,
    core_areas: &[Rect],
    gauges: &CpuGauges,
) {
    let screen = frame.area();
    let visible = |r: Rect| {
        let clipped = r.intersection(screen);
        (!clipped.is_empty()).then_some(clipped)
    };

    if let Some(area) = visible(average_area) {
        frame.render_widget(gauge_widget("Avg CPU".to_string(), gauges.average()), area);
    }
    for (i, &rect) in core_areas.iter().enumerate() {
        let (Some(area), Some(gauge)) = (visible(rect), gauges.core(i)) else {
            continue;
        };
        frame.render_widget(gauge_widget(format!("CPU {}", i + 1), gauge), area);
    }
}
