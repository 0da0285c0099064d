//! Rate computation for cumulative counters.
//!
//! Every rate shown on the dashboard (network throughput, disk I/O) goes
//! through these functions. Rates are never negative: a stalled clock or a
//! counter that went backwards yields 0 for that interval.

use std::time::Instant;

use crate::collector::{DiskCounters, NetworkCounters};

// ---------------------------------------------------------------------------
// Delta helpers
// ---------------------------------------------------------------------------

/// Compute u64 delta, returning `None` on counter regression (reset, wrap).
pub fn du64(curr: u64, prev: u64) -> Option<u64> {
    curr.checked_sub(prev)
}

/// Seconds elapsed from `prev` to `curr`, 0 if `curr` is not later.
pub fn elapsed_secs(prev: Instant, curr: Instant) -> f64 {
    curr.checked_duration_since(prev)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// `(curr - prev) / elapsed_secs`, or 0 when the interval is not positive.
pub fn per_second(prev: f64, curr: f64, elapsed_secs: f64) -> f64 {
    if elapsed_secs.is_nan() || elapsed_secs <= 0.0 {
        return 0.0;
    }
    let rate = (curr - prev) / elapsed_secs;
    if rate.is_finite() { rate.max(0.0) } else { 0.0 }
}

/// Per-second rate of a cumulative counter.
pub fn counter_rate(prev: u64, curr: u64, elapsed_secs: f64) -> f64 {
    match du64(curr, prev) {
        Some(delta) => per_second(0.0, delta as f64, elapsed_secs),
        None => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Unit conversion
// ---------------------------------------------------------------------------

/// Bytes per second to megabits per second.
pub fn bytes_to_mbps(bytes_per_sec: f64) -> f64 {
    bytes_per_sec * 8.0 / 1_000_000.0
}

/// Bytes per second to mebibytes per second.
pub fn bytes_to_mib(bytes_per_sec: f64) -> f64 {
    bytes_per_sec / 1024.0 / 1024.0
}

// ---------------------------------------------------------------------------
// Network / disk rates
// ---------------------------------------------------------------------------

/// Network throughput between two counter readings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetworkRate {
    pub rx_mbps: f64,
    pub tx_mbps: f64,
}

/// Computes receive/transmit throughput in Mbps.
pub fn network_rate(prev: &NetworkCounters, curr: &NetworkCounters) -> NetworkRate {
    let dt = elapsed_secs(prev.timestamp, curr.timestamp);
    NetworkRate {
        rx_mbps: bytes_to_mbps(counter_rate(prev.bytes_received, curr.bytes_received, dt)),
        tx_mbps: bytes_to_mbps(counter_rate(prev.bytes_sent, curr.bytes_sent, dt)),
    }
}

/// Read/write throughput of a single block device in MB/s.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRate {
    pub name: String,
    pub read_mbs: f64,
    pub write_mbs: f64,
}

/// Disk throughput across all devices seen in both readings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskRate {
    pub devices: Vec<DeviceRate>,
    pub total_read_mbs: f64,
    pub total_write_mbs: f64,
}

/// Computes per-device and aggregate disk throughput in MB/s.
///
/// Devices that appear in only one of the two readings are skipped.
pub fn disk_rate(prev: &DiskCounters, curr: &DiskCounters) -> DiskRate {
    let dt = elapsed_secs(prev.timestamp, curr.timestamp);
    let mut rate = DiskRate::default();
    for (name, io) in &curr.devices {
        let Some(before) = prev.devices.get(name) else {
            continue;
        };
        let read_mbs = bytes_to_mib(counter_rate(before.bytes_read, io.bytes_read, dt));
        let write_mbs = bytes_to_mib(counter_rate(before.bytes_written, io.bytes_written, dt));
        rate.total_read_mbs += read_mbs;
        rate.total_write_mbs += write_mbs;
        rate.devices.push(DeviceRate {
            name: name.clone(),
            read_mbs,
            write_mbs,
        });
    }
    rate
}
