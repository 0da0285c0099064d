//! Event handling for TUI.
//!
//! A separate thread polls for terminal events and emits ticks on a fixed
//! cadence, so input never delays or bunches up sampling.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use tracing::warn;

/// Minimum pause after a failed poll.
const POLL_RETRY_DELAY: Duration = Duration::from_millis(50);

/// User-facing input the dashboard reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Quit,
    Resize { width: u16, height: u16 },
}

/// Application events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Sampling tick.
    Tick,
    Input(UiEvent),
}

/// Maps a raw terminal event to a dashboard event.
///
/// `q` and Ctrl-C quit; everything else except resize is ignored.
pub fn map_event(event: CrosstermEvent) -> Option<UiEvent> {
    match event {
        CrosstermEvent::Key(key) => map_key(key),
        CrosstermEvent::Resize(width, height) => Some(UiEvent::Resize { width, height }),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UiEvent::Quit)
        }
        _ => None,
    }
}

/// Pause after a failed poll: until the next tick, but never less than
/// [`POLL_RETRY_DELAY`].
fn poll_retry_delay(until_tick: Duration) -> Duration {
    until_tick.max(POLL_RETRY_DELAY)
}

/// Event handler that polls for terminal events in a separate thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Kept alive to prevent channel closure.
    _tx: Option<Sender<Event>>,
}

impl EventHandler {
    /// Creates a new event handler ticking every `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut next_tick = Instant::now() + tick_rate;
            loop {
                let timeout = next_tick.saturating_duration_since(Instant::now());
                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(evt) => {
                            if let Some(ui) = map_event(evt) {
                                if event_tx.send(Event::Input(ui)).is_err() {
                                    break;
                                }
                            }
                        }
                        Err(e) => warn!(error = %e, "failed to read terminal event"),
                    },
                    Ok(false) => {}
                    Err(e) => {
                        warn!(error = %e, "failed to poll terminal events");
                        thread::sleep(poll_retry_delay(timeout));
                    }
                }

                let now = Instant::now();
                if now >= next_tick {
                    if event_tx.send(Event::Tick).is_err() {
                        break;
                    }
                    next_tick += tick_rate;
                    // Skip ticks missed while the loop was stalled.
                    if next_tick < now {
                        next_tick = now + tick_rate;
                    }
                }
            }
        });

        Self { rx, _tx: Some(tx) }
    }

    /// Handler fed by an existing channel, used to script events.
    #[cfg(test)]
    pub(crate) fn from_receiver(rx: Receiver<Event>) -> Self {
        Self { rx, _tx: None }
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        assert_eq!(
            map_event(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(UiEvent::Quit)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_event(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
        assert_eq!(map_event(key(KeyCode::Char('Q'), KeyModifiers::SHIFT)), None);
        assert_eq!(map_event(key(KeyCode::Esc, KeyModifiers::NONE)), None);
        assert_eq!(map_event(CrosstermEvent::FocusGained), None);
    }

    #[test]
    fn key_release_does_not_quit() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(CrosstermEvent::Key(release)), None);
    }

    #[test]
    fn resize_carries_dimensions() {
        assert_eq!(
            map_event(CrosstermEvent::Resize(200, 60)),
            Some(UiEvent::Resize {
                width: 200,
                height: 60
            })
        );
    }

    #[test]
    fn failed_poll_never_retries_immediately() {
        assert_eq!(poll_retry_delay(Duration::ZERO), POLL_RETRY_DELAY);
        assert_eq!(poll_retry_delay(Duration::from_millis(10)), POLL_RETRY_DELAY);
        assert_eq!(
            poll_retry_delay(Duration::from_millis(250)),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn scripted_receiver_reports_closure() {
        let (tx, rx) = mpsc::channel();
        let events = EventHandler::from_receiver(rx);
        tx.send(Event::Tick).unwrap();
        drop(tx);
        assert_eq!(events.next().unwrap(), Event::Tick);
        assert!(events.next().is_err());
    }
}
