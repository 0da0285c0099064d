//! Dashboard tuning constants.

use std::path::PathBuf;
use std::time::Duration;

/// Interval between sampling ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(300);

/// Fraction of the remaining distance a gauge covers per tick.
pub const ANIMATION_SPEED: f64 = 0.03;

/// Smallest history length, regardless of terminal width.
pub const MIN_HISTORY_CAPACITY: usize = 100;

/// Runtime configuration of the dashboard.
///
/// The tick interval is fixed; only the disk path used for the header's
/// capacity figures comes from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub tick_interval: Duration,
    pub animation_speed: f64,
    pub min_history: usize,
    /// Filesystem whose free/total space is shown in the header.
    pub disk_usage_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,
            animation_speed: ANIMATION_SPEED,
            min_history: MIN_HISTORY_CAPACITY,
            disk_usage_path: PathBuf::from("/"),
        }
    }
}

impl DashboardConfig {
    pub fn with_disk_usage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.disk_usage_path = path.into();
        self
    }

    /// History length needed to span a terminal of the given width.
    pub fn history_capacity(&self, width: u16) -> usize {
        usize::from(width).max(self.min_history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_capacity_has_floor() {
        let config = DashboardConfig::default();
        assert_eq!(config.history_capacity(40), 100);
        assert_eq!(config.history_capacity(100), 100);
        assert_eq!(config.history_capacity(237), 237);
    }

    #[test]
    fn defaults_match_dashboard_constants() {
        let config = DashboardConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(300));
        assert_eq!(config.animation_speed, 0.03);
        assert_eq!(config.disk_usage_path, PathBuf::from("/"));
    }
}
