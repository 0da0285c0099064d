//! Dashboard session state and the per-tick sampling pipeline.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::collector::{
    DiskCounters, DiskUsage, HostFacts, MemoryFacts, MetricsProvider, NetworkCounters,
};
use crate::config::DashboardConfig;
use crate::fmt::format_bytes;
use crate::gauge::CpuGauges;
use crate::history::DualHistory;
use crate::process::{self, ProcessSnapshot, ProcessTable};
use crate::rates::{self, DiskRate, NetworkRate};

use super::layout::LayoutGeometry;

/// Lifecycle of a dashboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Running,
    Resizing,
    Terminated,
}

/// Widgets tracked for redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidgetId {
    Header,
    CpuTitle,
    CpuGauges,
    NetworkStats,
    NetworkGraph,
    DiskStats,
    DiskGraph,
    Processes,
    Footer,
}

impl WidgetId {
    pub const ALL: [WidgetId; 9] = [
        WidgetId::Header,
        WidgetId::CpuTitle,
        WidgetId::CpuGauges,
        WidgetId::NetworkStats,
        WidgetId::NetworkGraph,
        WidgetId::DiskStats,
        WidgetId::DiskGraph,
        WidgetId::Processes,
        WidgetId::Footer,
    ];
}

/// Host facts shown in the header, read once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderInfo {
    pub host: Option<HostFacts>,
    pub cores: usize,
    pub memory: Option<MemoryFacts>,
    pub disk: Option<DiskUsage>,
    pub started: DateTime<Local>,
}

impl HeaderInfo {
    /// Block title with the session start time.
    pub fn title(&self) -> String {
        format!(" sysdash | since {} ", self.started.format("%Y-%m-%d %H:%M:%S"))
    }

    /// Header segments, or a single error segment if host facts are missing.
    pub fn segments(&self) -> Vec<String> {
        let Some(host) = &self.host else {
            return vec!["Error getting system information".to_string()];
        };
        let memory = match &self.memory {
            Some(m) => format!(
                "RAM: {} / {} ({:.1}%)",
                format_bytes(m.used),
                format_bytes(m.total),
                m.used_percent
            ),
            None => "RAM: n/a".to_string(),
        };
        let disk = match &self.disk {
            Some(d) => format!(
                "Disk: {} free / {} total ({:.1}% free)",
                format_bytes(d.free),
                format_bytes(d.total),
                100.0 - d.used_percent
            ),
            None => "Disk: n/a".to_string(),
        };
        vec![
            format!("Host: {}", host.hostname),
            format!("OS: {} {}", host.platform, host.platform_version),
            format!("{} cores", self.cores),
            memory,
            disk,
        ]
    }
}

/// Latest network throughput plus cumulative totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetworkSummary {
    pub rate: NetworkRate,
    pub total_received: u64,
    pub total_sent: u64,
}

impl fmt::Display for NetworkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "In:  {:8.2} Mbps  Out: {:8.2} Mbps  Total In: {}  Total Out: {}",
            self.rate.rx_mbps,
            self.rate.tx_mbps,
            format_bytes(self.total_received),
            format_bytes(self.total_sent)
        )
    }
}

/// Per-device disk lines, one `name Read: .. Write: ..` line per device.
pub fn disk_lines(rate: &DiskRate) -> Vec<String> {
    rate.devices
        .iter()
        .map(|d| {
            format!(
                "{} Read: {:.2} MB/s Write: {:.2} MB/s",
                d.name, d.read_mbs, d.write_mbs
            )
        })
        .collect()
}

/// Everything the dashboard shows, owned by the sampling loop.
pub struct Dashboard {
    config: DashboardConfig,
    phase: Phase,
    width: u16,
    height: u16,
    layout: LayoutGeometry,
    header: HeaderInfo,
    gauges: CpuGauges,
    network: DualHistory,
    disk: DualHistory,
    prev_network: Option<NetworkCounters>,
    prev_disk: Option<DiskCounters>,
    network_summary: NetworkSummary,
    network_text: String,
    disk_rate: DiskRate,
    disk_text: String,
    processes: Vec<ProcessSnapshot>,
    process_table: ProcessTable,
    dirty: BTreeSet<WidgetId>,
    needs_clear: bool,
}

impl Dashboard {
    /// Takes baseline readings and lays out a `width` x `height` terminal.
    ///
    /// Never fails: every missing reading is logged and degrades only its
    /// own widget.
    pub fn initialize(
        config: DashboardConfig,
        provider: &mut dyn MetricsProvider,
        width: u16,
        height: u16,
    ) -> Self {
        let cores = provider.cpu_core_count().unwrap_or_else(|e| {
            warn!(error = %e, "failed to read cpu count, assuming one core");
            1
        });
        let capacity = config.history_capacity(width);

        let prev_network = provider
            .network_counters()
            .inspect_err(|e| warn!(error = %e, "failed to read baseline network counters"))
            .ok();
        let prev_disk = provider
            .disk_counters()
            .inspect_err(|e| warn!(error = %e, "failed to read baseline disk counters"))
            .ok();

        let header = HeaderInfo {
            host: provider
                .host_facts()
                .inspect_err(|e| warn!(error = %e, "failed to read host info"))
                .ok(),
            cores,
            memory: provider
                .memory_facts()
                .inspect_err(|e| warn!(error = %e, "failed to read memory info"))
                .ok(),
            disk: provider
                .disk_usage(&config.disk_usage_path)
                .inspect_err(|e| {
                    warn!(path = %config.disk_usage_path.display(), error = %e, "failed to read disk usage")
                })
                .ok(),
            started: Local::now(),
        };

        info!(cores, width, height, capacity, "dashboard initialized");

        let mut dashboard = Self {
            phase: Phase::Initializing,
            width,
            height,
            layout: LayoutGeometry::compute(width, height, cores),
            header,
            gauges: CpuGauges::new(cores),
            network: DualHistory::new(capacity),
            disk: DualHistory::new(capacity),
            prev_network,
            prev_disk,
            network_summary: NetworkSummary::default(),
            network_text: String::new(),
            disk_rate: DiskRate::default(),
            disk_text: String::new(),
            processes: Vec::new(),
            process_table: ProcessTable::default(),
            dirty: BTreeSet::new(),
            needs_clear: false,
            config,
        };
        dashboard.process_table = ProcessTable::format(&[], dashboard.process_width());
        dashboard.invalidate_all();
        dashboard.phase = Phase::Running;
        dashboard
    }

    /// Runs one sampling tick.
    ///
    /// Order: CPU targets, gauge animation, network, disk, processes.
    pub fn tick(&mut self, provider: &mut dyn MetricsProvider) {
        if self.phase != Phase::Running {
            return;
        }
        self.update_cpu(provider);
        self.update_network(provider);
        self.update_disk(provider);
        self.update_processes(provider);
    }

    fn update_cpu(&mut self, provider: &mut dyn MetricsProvider) {
        match provider.cpu_percent_per_core() {
            Ok(per_core) => self.gauges.update_targets(&per_core),
            Err(e) => warn!(error = %e, "failed to read cpu utilization"),
        }
        if self.gauges.animate(self.config.animation_speed) {
            self.dirty.insert(WidgetId::CpuGauges);
        }
    }

    fn update_network(&mut self, provider: &mut dyn MetricsProvider) {
        let curr = match provider.network_counters() {
            Ok(curr) => curr,
            Err(e) => {
                warn!(error = %e, "failed to read network counters");
                return;
            }
        };
        if let Some(prev) = &self.prev_network {
            let rate = rates::network_rate(prev, &curr);
            self.network_summary = NetworkSummary {
                rate,
                total_received: curr.bytes_received,
                total_sent: curr.bytes_sent,
            };
            let text = self.network_summary.to_string();
            if text != self.network_text {
                self.network_text = text;
                self.dirty.insert(WidgetId::NetworkStats);
            }
            self.network.push(rate.rx_mbps, rate.tx_mbps);
            self.dirty.insert(WidgetId::NetworkGraph);
        }
        self.prev_network = Some(curr);
    }

    fn update_disk(&mut self, provider: &mut dyn MetricsProvider) {
        let curr = match provider.disk_counters() {
            Ok(curr) => curr,
            Err(e) => {
                warn!(error = %e, "failed to read disk counters");
                return;
            }
        };
        if let Some(prev) = &self.prev_disk {
            let rate = rates::disk_rate(prev, &curr);
            let text = disk_lines(&rate).join("\n");
            if text != self.disk_text {
                self.disk_text = text;
                self.dirty.insert(WidgetId::DiskStats);
            }
            self.disk.push(rate.total_read_mbs, rate.total_write_mbs);
            self.disk_rate = rate;
            self.dirty.insert(WidgetId::DiskGraph);
        }
        self.prev_disk = Some(curr);
    }

    fn update_processes(&mut self, provider: &mut dyn MetricsProvider) {
        match provider.processes() {
            Ok(records) => {
                let total = records.len();
                self.processes = process::rank(process::capture(records));
                if self.processes.len() < total {
                    debug!(
                        skipped = total - self.processes.len(),
                        "skipped processes with incomplete readings"
                    );
                }
                let table = ProcessTable::format(&self.processes, self.process_width());
                if table != self.process_table {
                    self.process_table = table;
                    self.dirty.insert(WidgetId::Processes);
                }
            }
            Err(e) => warn!(error = %e, "failed to enumerate processes"),
        }
    }

    /// Re-lays out the dashboard for a new terminal size.
    ///
    /// History buffers grow to fit a wider terminal and are never shrunk.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.phase == Phase::Terminated {
            return;
        }
        self.phase = Phase::Resizing;
        self.width = width;
        self.height = height;
        self.layout = LayoutGeometry::compute(width, height, self.gauges.cores());

        let capacity = self.config.history_capacity(width);
        if capacity > self.network.capacity() {
            self.network.grow(capacity);
        }
        if capacity > self.disk.capacity() {
            self.disk.grow(capacity);
        }
        self.process_table = ProcessTable::format(&self.processes, self.process_width());

        debug!(width, height, capacity = self.network.capacity(), "dashboard resized");
        self.invalidate_all();
        self.phase = Phase::Running;
    }

    pub fn terminate(&mut self) {
        self.phase = Phase::Terminated;
        self.dirty.clear();
        self.needs_clear = false;
    }

    /// Marks every widget dirty and requests a clear before the next draw.
    fn invalidate_all(&mut self) {
        self.dirty.extend(WidgetId::ALL);
        self.needs_clear = true;
    }

    /// Usable width inside the process table border.
    fn process_width(&self) -> u16 {
        self.layout.processes.width.saturating_sub(2)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn needs_draw(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn needs_clear(&self) -> bool {
        self.needs_clear
    }

    pub fn is_dirty(&self, widget: WidgetId) -> bool {
        self.dirty.contains(&widget)
    }

    /// Resets redraw tracking after a frame has been painted.
    pub fn mark_drawn(&mut self) {
        self.dirty.clear();
        self.needs_clear = false;
    }

    pub fn layout(&self) -> &LayoutGeometry {
        &self.layout
    }

    pub fn header(&self) -> &HeaderInfo {
        &self.header
    }

    pub fn gauges(&self) -> &CpuGauges {
        &self.gauges
    }

    pub fn network(&self) -> &DualHistory {
        &self.network
    }

    pub fn disk(&self) -> &DualHistory {
        &self.disk
    }

    pub fn network_summary(&self) -> &NetworkSummary {
        &self.network_summary
    }

    /// Network stats text, empty until the first rate is known.
    pub fn network_text(&self) -> &str {
        &self.network_text
    }

    pub fn disk_rate(&self) -> &DiskRate {
        &self.disk_rate
    }

    pub fn disk_text(&self) -> &str {
        &self.disk_text
    }

    pub fn processes(&self) -> &[ProcessSnapshot] {
        &self.processes
    }

    pub fn process_table(&self) -> &ProcessTable {
        &self.process_table
    }

    /// Approximate time covered by the history buffers, in seconds.
    pub fn history_span_secs(&self) -> u64 {
        (self.network.capacity() as f64 * self.config.tick_interval.as_secs_f64()).round() as u64
    }
}
