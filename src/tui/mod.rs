//! Terminal user interface for sysdash.
//!
//! The layout engine positions every section from the terminal size, the
//! dashboard state runs the sampling pipeline, and the app drives both from
//! a tick/input event loop.

mod app;
mod event;
mod layout;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use event::{Event, UiEvent, map_event};
pub use layout::{LayoutGeometry, cpu_section_height};
pub use state::{Dashboard, HeaderInfo, NetworkSummary, Phase, WidgetId};
