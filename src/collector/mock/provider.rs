//! Scripted metrics provider.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::time::Instant;

use crate::collector::model::{
    DeviceIo, DiskCounters, DiskUsage, HostFacts, MemoryFacts, NetworkCounters, ProcessRecord,
};
use crate::collector::traits::MetricsProvider;
use crate::error::CollectError;

/// Provider calls that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cpu,
    CpuCount,
    Network,
    Disk,
    Processes,
    Host,
    Memory,
    DiskUsage,
}

impl Metric {
    fn name(self) -> &'static str {
        match self {
            Metric::Cpu => "cpu",
            Metric::CpuCount => "cpu count",
            Metric::Network => "network",
            Metric::Disk => "disk io",
            Metric::Processes => "processes",
            Metric::Host => "host",
            Metric::Memory => "memory",
            Metric::DiskUsage => "disk usage",
        }
    }
}

/// Provider that reports its public fields verbatim.
///
/// Tests mutate the fields between ticks to script a scenario.
#[derive(Debug, Clone)]
pub struct MockProvider {
    pub cpu: Vec<f64>,
    pub network: NetworkCounters,
    pub disks: BTreeMap<String, DeviceIo>,
    pub disk_timestamp: Instant,
    pub processes: Vec<ProcessRecord>,
    pub host: HostFacts,
    pub memory: MemoryFacts,
    pub disk_usage: DiskUsage,
    failing: HashSet<Metric>,
}

impl MockProvider {
    /// A quiet four-core host with zeroed counters at `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            cpu: vec![0.0; 4],
            network: NetworkCounters {
                bytes_received: 0,
                bytes_sent: 0,
                timestamp: now,
            },
            disks: BTreeMap::from([("sda".to_string(), DeviceIo::default())]),
            disk_timestamp: now,
            processes: Vec::new(),
            host: HostFacts {
                hostname: "testhost".to_string(),
                platform: "linux".to_string(),
                platform_version: "6.1".to_string(),
            },
            memory: MemoryFacts {
                used: 4 * 1024 * 1024 * 1024,
                total: 16 * 1024 * 1024 * 1024,
                used_percent: 25.0,
            },
            disk_usage: DiskUsage {
                free: 100 * 1024 * 1024 * 1024,
                total: 500 * 1024 * 1024 * 1024,
                used_percent: 80.0,
            },
            failing: HashSet::new(),
        }
    }

    /// Makes every subsequent call for `metric` fail.
    pub fn fail(&mut self, metric: Metric) {
        self.failing.insert(metric);
    }

    pub fn recover(&mut self, metric: Metric) {
        self.failing.remove(&metric);
    }

    /// Sets network counters and their timestamp.
    pub fn set_network(&mut self, bytes_received: u64, bytes_sent: u64, timestamp: Instant) {
        self.network = NetworkCounters {
            bytes_received,
            bytes_sent,
            timestamp,
        };
    }

    /// Sets one device's counters and the disk reading timestamp.
    pub fn set_disk(&mut self, device: &str, io: DeviceIo, timestamp: Instant) {
        self.disks.insert(device.to_string(), io);
        self.disk_timestamp = timestamp;
    }

    fn check(&self, metric: Metric) -> Result<(), CollectError> {
        if self.failing.contains(&metric) {
            Err(CollectError::unavailable(metric.name(), "injected failure"))
        } else {
            Ok(())
        }
    }
}

impl MetricsProvider for MockProvider {
    fn cpu_percent_per_core(&mut self) -> Result<Vec<f64>, CollectError> {
        self.check(Metric::Cpu)?;
        Ok(self.cpu.clone())
    }

    fn cpu_core_count(&mut self) -> Result<usize, CollectError> {
        self.check(Metric::CpuCount)?;
        Ok(self.cpu.len())
    }

    fn network_counters(&mut self) -> Result<NetworkCounters, CollectError> {
        self.check(Metric::Network)?;
        Ok(self.network)
    }

    fn disk_counters(&mut self) -> Result<DiskCounters, CollectError> {
        self.check(Metric::Disk)?;
        Ok(DiskCounters {
            devices: self.disks.clone(),
            timestamp: self.disk_timestamp,
        })
    }

    fn processes(&mut self) -> Result<Vec<ProcessRecord>, CollectError> {
        self.check(Metric::Processes)?;
        Ok(self.processes.clone())
    }

    fn host_facts(&mut self) -> Result<HostFacts, CollectError> {
        self.check(Metric::Host)?;
        Ok(self.host.clone())
    }

    fn memory_facts(&mut self) -> Result<MemoryFacts, CollectError> {
        self.check(Metric::Memory)?;
        Ok(self.memory)
    }

    fn disk_usage(&mut self, _path: &Path) -> Result<DiskUsage, CollectError> {
        self.check(Metric::DiskUsage)?;
        Ok(self.disk_usage)
    }
}
