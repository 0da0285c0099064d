//! sysdash - live terminal dashboard for host resource usage.
//!
//! The library holds the sampling-to-visualization pipeline:
//! - `rates`: counter deltas to per-second rates
//! - `history`: fixed-capacity sliding series for graphs
//! - `scale`: fast-up / slow-down graph ceiling
//! - `gauge`: animated CPU gauges
//! - `process`: process ranking and column formatting
//! - `collector`: metrics provider abstraction (sysinfo, mock)
//! - `tui`: layout, session state, event loop and widgets

pub mod collector;
pub mod config;
pub mod error;
pub mod fmt;
pub mod gauge;
pub mod history;
pub mod process;
pub mod rates;
pub mod scale;
pub mod tui;

pub use config::DashboardConfig;
pub use error::{CollectError, Error, Result};
