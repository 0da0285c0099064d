//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::gauge::Severity;

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const BORDER: Color = Color::Blue;
    pub const TITLE: Color = Color::Cyan;

    // Load bands
    pub const NOMINAL: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const CRITICAL: Color = Color::Red;

    // Series colors
    pub const NET_RX: Color = Color::Green;
    pub const NET_TX: Color = Color::Blue;
    pub const DISK_READ: Color = Color::Green;
    pub const DISK_WRITE: Color = Color::Red;

    pub const FOOTER: Color = Color::Red;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG)
    }

    /// Block border style.
    pub fn border() -> Style {
        Style::default().fg(Theme::BORDER)
    }

    /// Block title style.
    pub fn title() -> Style {
        Style::default()
            .fg(Theme::TITLE)
            .add_modifier(Modifier::BOLD)
    }

    /// Header separator style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Gauge bar color for a load band.
    pub fn severity(severity: Severity) -> Style {
        let color = match severity {
            Severity::Nominal => Theme::NOMINAL,
            Severity::Warning => Theme::WARNING,
            Severity::Critical => Theme::CRITICAL,
        };
        Style::default().fg(color)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::TITLE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn net_rx() -> Style {
        Style::default().fg(Theme::NET_RX)
    }

    pub fn net_tx() -> Style {
        Style::default().fg(Theme::NET_TX)
    }

    pub fn disk_read() -> Style {
        Style::default().fg(Theme::DISK_READ)
    }

    pub fn disk_write() -> Style {
        Style::default().fg(Theme::DISK_WRITE)
    }

    /// Footer hint style.
    pub fn footer() -> Style {
        Style::default().fg(Theme::FOOTER)
    }
}
