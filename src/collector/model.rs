//! Point-in-time readings returned by metrics providers.

use std::collections::BTreeMap;
use std::time::Instant;

/// Cumulative network byte counters summed over all interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkCounters {
    pub bytes_received: u64,
    pub bytes_sent: u64,
    /// When the counters were read.
    pub timestamp: Instant,
}

/// Cumulative I/O byte counters of one block device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceIo {
    pub bytes_read: u64,
    pub bytes_written: u64,
}

impl DeviceIo {
    pub fn new(bytes_read: u64, bytes_written: u64) -> Self {
        Self {
            bytes_read,
            bytes_written,
        }
    }
}

/// Per-device disk counters keyed by device name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskCounters {
    pub devices: BTreeMap<String, DeviceIo>,
    pub timestamp: Instant,
}

/// Raw per-process reading.
///
/// Fields the provider could not read (permissions, process exited while
/// enumerating) are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: Option<String>,
    pub cpu_percent: Option<f64>,
    pub memory_percent: Option<f64>,
    pub command_line: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostFacts {
    pub hostname: String,
    pub platform: String,
    pub platform_version: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryFacts {
    pub used: u64,
    pub total: u64,
    pub used_percent: f64,
}

/// Capacity of the filesystem holding a path.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiskUsage {
    pub free: u64,
    pub total: u64,
    pub used_percent: f64,
}
