//! Header with host facts and the footer hint.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::state::HeaderInfo;
use crate::tui::style::Styles;

const SEPARATOR: &str = " | ";

/// Builds the header line, segments joined by `|`.
fn header_line(header: &HeaderInfo) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, segment) in header.segments().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, Styles::dim()));
        }
        spans.push(Span::styled(segment, Styles::default()));
    }
    Line::from(spans)
}

/// Renders the bordered header bar.
pub fn render_header(frame: &mut Frame, area: Rect, header: &HeaderInfo) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .title(Span::styled(header.title(), Styles::title()));
    frame.render_widget(Paragraph::new(header_line(header)).block(block), area);
}

/// Renders the quit hint on the last line.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    frame.render_widget(Paragraph::new("Press q to quit").style(Styles::footer()), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_joins_segments() {
        let header = HeaderInfo::default();
        let line = header_line(&header);
        assert_eq!(line.to_string(), "Error getting system information");
    }
}
