//! Abstraction over the source of host metrics.
//!
//! The `MetricsProvider` trait lets the sampling loop work with the real host
//! through sysinfo or with in-memory data for tests and demo mode.

use std::path::Path;

use crate::error::CollectError;

use super::model::{DiskCounters, DiskUsage, HostFacts, MemoryFacts, NetworkCounters, ProcessRecord};

/// Source of point-in-time host readings.
///
/// Every call may fail. Failures are reported per call so the loop can keep
/// the last known state of only the affected subsystem.
pub trait MetricsProvider {
    /// Utilization of each logical core, in percent.
    fn cpu_percent_per_core(&mut self) -> Result<Vec<f64>, CollectError>;

    /// Number of logical cores.
    fn cpu_core_count(&mut self) -> Result<usize, CollectError>;

    /// Cumulative network byte counters over all interfaces.
    fn network_counters(&mut self) -> Result<NetworkCounters, CollectError>;

    /// Cumulative read/write byte counters per block device.
    fn disk_counters(&mut self) -> Result<DiskCounters, CollectError>;

    /// Live processes, in enumeration order.
    fn processes(&mut self) -> Result<Vec<ProcessRecord>, CollectError>;

    fn host_facts(&mut self) -> Result<HostFacts, CollectError>;

    fn memory_facts(&mut self) -> Result<MemoryFacts, CollectError>;

    /// Capacity of the filesystem that contains `path`.
    fn disk_usage(&mut self, path: &Path) -> Result<DiskUsage, CollectError>;
}
