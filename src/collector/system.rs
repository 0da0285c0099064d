//! Live host metrics backed by sysinfo.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use sysinfo::{Disks, Networks, ProcessesToUpdate, System};
use tracing::debug;

use crate::error::CollectError;

use super::model::{
    DeviceIo, DiskCounters, DiskUsage, HostFacts, MemoryFacts, NetworkCounters, ProcessRecord,
};
use super::traits::MetricsProvider;

/// Reads metrics of the machine the dashboard runs on.
///
/// CPU and per-process utilization are measured between consecutive
/// refreshes, so the first reading after construction may be zero.
pub struct SystemProvider {
    sys: System,
    networks: Networks,
    disks: Disks,
}

impl SystemProvider {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_cpu_usage();
        let networks = Networks::new_with_refreshed_list();
        let disks = Disks::new_with_refreshed_list();
        debug!(
            cpus = sys.cpus().len(),
            interfaces = networks.len(),
            disks = disks.list().len(),
            "system provider ready"
        );
        Self {
            sys,
            networks,
            disks,
        }
    }
}

impl Default for SystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SystemProvider {
    fn cpu_percent_per_core(&mut self) -> Result<Vec<f64>, CollectError> {
        self.sys.refresh_cpu_usage();
        let usage: Vec<f64> = self
            .sys
            .cpus()
            .iter()
            .map(|cpu| f64::from(cpu.cpu_usage()))
            .collect();
        if usage.is_empty() {
            return Err(CollectError::unavailable("cpu", "no cores reported"));
        }
        Ok(usage)
    }

    fn cpu_core_count(&mut self) -> Result<usize, CollectError> {
        match self.sys.cpus().len() {
            0 => Err(CollectError::unavailable("cpu count", "no cores reported")),
            n => Ok(n),
        }
    }

    fn network_counters(&mut self) -> Result<NetworkCounters, CollectError> {
        self.networks.refresh(true);
        if self.networks.is_empty() {
            return Err(CollectError::unavailable("network", "no interfaces"));
        }
        let (bytes_received, bytes_sent) = self
            .networks
            .values()
            .fold((0u64, 0u64), |(rx, tx), data| {
                (
                    rx.saturating_add(data.total_received()),
                    tx.saturating_add(data.total_transmitted()),
                )
            });
        Ok(NetworkCounters {
            bytes_received,
            bytes_sent,
            timestamp: Instant::now(),
        })
    }

    fn disk_counters(&mut self) -> Result<DiskCounters, CollectError> {
        self.disks.refresh(true);
        let mut devices = BTreeMap::new();
        for disk in self.disks.list() {
            let usage = disk.usage();
            // several mount points may share one device
            devices.insert(
                disk.name().to_string_lossy().into_owned(),
                DeviceIo::new(usage.total_read_bytes, usage.total_written_bytes),
            );
        }
        if devices.is_empty() {
            return Err(CollectError::unavailable("disk io", "no disks"));
        }
        Ok(DiskCounters {
            devices,
            timestamp: Instant::now(),
        })
    }

    fn processes(&mut self) -> Result<Vec<ProcessRecord>, CollectError> {
        self.sys.refresh_memory();
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        let total_memory = self.sys.total_memory();

        let mut records: Vec<ProcessRecord> = self
            .sys
            .processes()
            .values()
            .map(|process| {
                let name = process.name().to_string_lossy();
                let command_line = process
                    .cmd()
                    .iter()
                    .map(|arg| arg.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" ");
                let memory_percent = (total_memory > 0)
                    .then(|| process.memory() as f64 / total_memory as f64 * 100.0);
                ProcessRecord {
                    pid: process.pid().as_u32(),
                    name: (!name.is_empty()).then(|| name.into_owned()),
                    cpu_percent: Some(f64::from(process.cpu_usage())),
                    memory_percent,
                    command_line: (!command_line.is_empty()).then_some(command_line),
                }
            })
            .collect();
        records.sort_by_key(|r| r.pid);
        Ok(records)
    }

    fn host_facts(&mut self) -> Result<HostFacts, CollectError> {
        let hostname = System::host_name()
            .ok_or_else(|| CollectError::unavailable("host", "hostname unknown"))?;
        Ok(HostFacts {
            hostname,
            platform: System::name().unwrap_or_default(),
            platform_version: System::os_version().unwrap_or_default(),
        })
    }

    fn memory_facts(&mut self) -> Result<MemoryFacts, CollectError> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(CollectError::unavailable("memory", "total memory is zero"));
        }
        let used = self.sys.used_memory();
        Ok(MemoryFacts {
            used,
            total,
            used_percent: used as f64 / total as f64 * 100.0,
        })
    }

    fn disk_usage(&mut self, path: &Path) -> Result<DiskUsage, CollectError> {
        self.disks.refresh(true);
        let disk = self
            .disks
            .list()
            .iter()
            .filter(|d| path.starts_with(d.mount_point()))
            .max_by_key(|d| d.mount_point().as_os_str().len())
            .ok_or_else(|| CollectError::NoFilesystem(path.display().to_string()))?;

        let total = disk.total_space();
        let free = disk.available_space();
        let used_percent = if total > 0 {
            total.saturating_sub(free) as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Ok(DiskUsage {
            free,
            total,
            used_percent,
        })
    }
}
