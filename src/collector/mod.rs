//! Metrics collection.
//!
//! The dashboard pulls every reading through the [`MetricsProvider`] trait so
//! the sampling pipeline can run against the live host ([`SystemProvider`])
//! or scripted data ([`mock::MockProvider`], [`mock::SyntheticProvider`]).

pub mod mock;
mod model;
mod system;
mod traits;

pub use model::{
    DeviceIo, DiskCounters, DiskUsage, HostFacts, MemoryFacts, NetworkCounters, ProcessRecord,
};
pub use system::SystemProvider;
pub use traits::MetricsProvider;
