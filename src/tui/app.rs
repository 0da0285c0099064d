//! Main TUI application.

use std::io;
use std::time::Instant;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, info, warn};

use crate::collector::MetricsProvider;
use crate::config::DashboardConfig;
use crate::error::Result;

use super::event::{Event, EventHandler, UiEvent};
use super::render::render;
use super::state::Dashboard;

/// Main TUI application.
pub struct App {
    provider: Box<dyn MetricsProvider>,
    config: DashboardConfig,
}

impl App {
    /// Creates a new App sampling from `provider`.
    pub fn new(provider: Box<dyn MetricsProvider>, config: DashboardConfig) -> Self {
        Self { provider, config }
    }

    /// Runs the dashboard until the user quits.
    ///
    /// The terminal is restored even when the loop fails.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(e.into());
            }
        };

        let events = EventHandler::new(self.config.tick_interval);
        let result = self.event_loop(&mut terminal, &events);

        let restored = restore_terminal(&mut terminal);
        result?;
        restored?;
        Ok(())
    }

    /// Draws and samples until a quit request or until the event source
    /// goes away. Returns the final session state.
    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &EventHandler,
    ) -> Result<Dashboard> {
        let size = terminal.size()?;
        let mut dashboard = Dashboard::initialize(
            self.config.clone(),
            self.provider.as_mut(),
            size.width,
            size.height,
        );

        loop {
            if dashboard.needs_clear() {
                terminal.clear()?;
            }
            if dashboard.needs_draw() {
                terminal.draw(|frame| render(frame, &dashboard))?;
                dashboard.mark_drawn();
            }

            match events.next() {
                Ok(Event::Tick) => {
                    let started = Instant::now();
                    dashboard.tick(self.provider.as_mut());
                    let took = started.elapsed();
                    if took > self.config.tick_interval {
                        warn!(
                            took_ms = took.as_millis() as u64,
                            "sampling overran the tick interval"
                        );
                    }
                }
                Ok(Event::Input(UiEvent::Resize { width, height })) => {
                    debug!(width, height, "terminal resized");
                    dashboard.resize(width, height);
                }
                Ok(Event::Input(UiEvent::Quit)) => {
                    info!("quit requested");
                    dashboard.terminate();
                    break;
                }
                Err(_) => {
                    info!("event source closed, stopping");
                    dashboard.terminate();
                    break;
                }
            }
        }

        Ok(dashboard)
    }
}

fn restore_terminal<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
