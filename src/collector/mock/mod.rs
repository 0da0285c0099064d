//! In-memory metrics providers for tests and demo mode.
//!
//! `MockProvider` returns whatever its fields hold and can be told to fail
//! individual calls. `SyntheticProvider` generates plausible, moving data so
//! the dashboard can be exercised without touching the host.

mod provider;
mod scenarios;

pub use provider::{Metric, MockProvider};
pub use scenarios::SyntheticProvider;
