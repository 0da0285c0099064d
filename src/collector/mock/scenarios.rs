//! Generated host activity for demo mode.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use crate::collector::model::{
    DeviceIo, DiskCounters, DiskUsage, HostFacts, MemoryFacts, NetworkCounters, ProcessRecord,
};
use crate::collector::traits::MetricsProvider;
use crate::error::CollectError;

const GIB: u64 = 1024 * 1024 * 1024;

/// Processes simulated by [`SyntheticProvider`]: name, command, base CPU%, mem%.
const PROCESSES: &[(&str, &str, f64, f64)] = &[
    ("systemd", "/sbin/init splash", 0.1, 0.1),
    ("postgres", "postgres: checkpointer", 2.0, 3.5),
    ("postgres", "postgres: autovacuum launcher", 0.5, 1.2),
    ("nginx", "nginx: worker process", 4.0, 0.8),
    ("cargo", "cargo build --release --workspace --all-features", 35.0, 6.0),
    ("rustc", "rustc --crate-name sysdash --edition=2024 src/lib.rs", 60.0, 9.5),
    ("firefox", "/usr/lib/firefox/firefox -contentproc -childID 12", 8.0, 12.0),
    ("sshd", "sshd: admin@pts/0", 0.0, 0.1),
    ("kworker/2:1", "", 0.3, 0.0),
    ("bash", "-bash", 0.0, 0.05),
];

/// Provider producing smooth, deterministic pseudo-random activity.
///
/// Each call advances an internal phase, so repeated sampling shows moving
/// gauges, traffic bursts and a shifting process ranking.
#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    cores: usize,
    seed: u64,
    phase: f64,
    rx: u64,
    tx: u64,
    disks: BTreeMap<String, DeviceIo>,
}

impl SyntheticProvider {
    pub fn new(cores: usize) -> Self {
        Self {
            cores: cores.max(1),
            seed: 0x9E37_79B9_7F4A_7C15,
            phase: 0.0,
            rx: 0,
            tx: 0,
            disks: BTreeMap::from([
                ("nvme0n1".to_string(), DeviceIo::default()),
                ("sda".to_string(), DeviceIo::default()),
            ]),
        }
    }

    /// Next value in `[0, 1)` (xorshift64*).
    fn noise(&mut self) -> f64 {
        self.seed ^= self.seed >> 12;
        self.seed ^= self.seed << 25;
        self.seed ^= self.seed >> 27;
        let x = self.seed.wrapping_mul(0x2545_F491_4F6C_DD1D);
        (x >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Smooth load curve in `[0, 1]` with a per-channel offset.
    fn wave(&self, offset: f64) -> f64 {
        ((self.phase + offset).sin() * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

impl MetricsProvider for SyntheticProvider {
    fn cpu_percent_per_core(&mut self) -> Result<Vec<f64>, CollectError> {
        self.phase += 0.05;
        let mut usage = Vec::with_capacity(self.cores);
        for core in 0..self.cores {
            let base = self.wave(core as f64 * 0.7) * 85.0;
            usage.push((base + self.noise() * 15.0).min(100.0));
        }
        Ok(usage)
    }

    fn cpu_core_count(&mut self) -> Result<usize, CollectError> {
        Ok(self.cores)
    }

    fn network_counters(&mut self) -> Result<NetworkCounters, CollectError> {
        let burst = if self.noise() > 0.9 { 4.0 } else { 1.0 };
        self.rx += ((self.wave(1.3) * 600_000.0 + self.noise() * 50_000.0) * burst) as u64;
        self.tx += ((self.wave(2.1) * 150_000.0 + self.noise() * 20_000.0) * burst) as u64;
        Ok(NetworkCounters {
            bytes_received: self.rx,
            bytes_sent: self.tx,
            timestamp: Instant::now(),
        })
    }

    fn disk_counters(&mut self) -> Result<DiskCounters, CollectError> {
        let read = (self.wave(0.4) * 8.0 * 1024.0 * 1024.0) as u64;
        let write = (self.noise() * 3.0 * 1024.0 * 1024.0) as u64;
        for (i, io) in self.disks.values_mut().enumerate() {
            let share = 1 + i as u64;
            io.bytes_read += read / share;
            io.bytes_written += write / share;
        }
        Ok(DiskCounters {
            devices: self.disks.clone(),
            timestamp: Instant::now(),
        })
    }

    fn processes(&mut self) -> Result<Vec<ProcessRecord>, CollectError> {
        let mut records = Vec::with_capacity(PROCESSES.len());
        for (i, &(name, cmd, cpu, mem)) in PROCESSES.iter().enumerate() {
            let jitter = self.noise() * cpu * 0.5;
            records.push(ProcessRecord {
                pid: 100 + i as u32 * 37,
                name: Some(name.to_string()),
                cpu_percent: Some(cpu * (0.5 + self.wave(i as f64)) + jitter),
                memory_percent: Some(mem),
                command_line: (!cmd.is_empty()).then(|| cmd.to_string()),
            });
        }
        Ok(records)
    }

    fn host_facts(&mut self) -> Result<HostFacts, CollectError> {
        Ok(HostFacts {
            hostname: "demo".to_string(),
            platform: "synthetic".to_string(),
            platform_version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    fn memory_facts(&mut self) -> Result<MemoryFacts, CollectError> {
        let total = 32 * GIB;
        let used = (total as f64 * (0.35 + self.wave(0.2) * 0.2)) as u64;
        Ok(MemoryFacts {
            used,
            total,
            used_percent: used as f64 / total as f64 * 100.0,
        })
    }

    fn disk_usage(&mut self, _path: &Path) -> Result<DiskUsage, CollectError> {
        Ok(DiskUsage {
            free: 412 * GIB,
            total: 953 * GIB,
            used_percent: (953.0 - 412.0) / 953.0 * 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_only_increase() {
        let mut provider = SyntheticProvider::new(2);
        let mut prev = provider.network_counters().map(|c| c.bytes_received).unwrap_or(0);
        for _ in 0..50 {
            let curr = provider.network_counters().map(|c| c.bytes_received).unwrap_or(0);
            assert!(curr >= prev);
            prev = curr;
        }
    }

    #[test]
    fn cpu_readings_stay_in_range() {
        let mut provider = SyntheticProvider::new(8);
        for _ in 0..100 {
            let usage = provider.cpu_percent_per_core().unwrap_or_default();
            assert_eq!(usage.len(), 8);
            assert!(usage.iter().all(|&u| (0.0..=100.0).contains(&u)));
        }
    }

    #[test]
    fn some_processes_lack_a_command_line() {
        let mut provider = SyntheticProvider::new(1);
        let records = provider.processes().unwrap_or_default();
        assert_eq!(records.len(), PROCESSES.len());
        assert!(records.iter().any(|r| r.command_line.is_none()));
    }
}
