//! Animated CPU gauges.

/// Distance under which a gauge jumps straight to its target.
pub const SNAP_THRESHOLD: f64 = 0.5;

/// Severity band of a displayed percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Nominal,
    Warning,
    Critical,
}

impl Severity {
    /// Band for an integer percentage: `<50`, `50..80`, `>=80`.
    pub fn of(percent: u16) -> Self {
        match percent {
            0..=49 => Severity::Nominal,
            50..=79 => Severity::Warning,
            _ => Severity::Critical,
        }
    }
}

/// Displayed and target value of one gauge, both in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GaugeAnimator {
    current: f64,
    target: f64,
}

impl GaugeAnimator {
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, percent: f64) {
        if percent.is_finite() {
            self.target = percent.clamp(0.0, 100.0);
        }
    }

    /// Moves `current` a `speed` fraction of the way toward `target`.
    pub fn tick(&mut self, speed: f64) {
        let diff = self.target - self.current;
        if diff.abs() < SNAP_THRESHOLD {
            self.current = self.target;
        } else {
            self.current += diff * speed;
        }
    }

    /// Displayed percentage, truncated.
    pub fn percent(&self) -> u16 {
        self.current.clamp(0.0, 100.0) as u16
    }

    pub fn severity(&self) -> Severity {
        Severity::of(self.percent())
    }
}

/// CPU gauges: index 0 is the all-core average, then one per core.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuGauges {
    gauges: Vec<GaugeAnimator>,
}

impl CpuGauges {
    pub fn new(cores: usize) -> Self {
        Self {
            gauges: vec![GaugeAnimator::default(); cores + 1],
        }
    }

    pub fn cores(&self) -> usize {
        self.gauges.len() - 1
    }

    pub fn average(&self) -> &GaugeAnimator {
        &self.gauges[0]
    }

    pub fn core(&self, index: usize) -> Option<&GaugeAnimator> {
        self.gauges.get(index + 1)
    }

    /// Sets targets from per-core readings.
    ///
    /// Readings past the known core count only contribute to the average.
    /// An empty reading leaves all targets unchanged.
    pub fn update_targets(&mut self, per_core: &[f64]) {
        if per_core.is_empty() {
            return;
        }
        let avg = per_core.iter().sum::<f64>() / per_core.len() as f64;
        self.gauges[0].set_target(avg);
        for (gauge, &percent) in self.gauges[1..].iter_mut().zip(per_core) {
            gauge.set_target(percent);
        }
    }

    /// Advances every gauge one tick.
    ///
    /// Returns `true` if any displayed percentage or band changed.
    pub fn animate(&mut self, speed: f64) -> bool {
        let mut changed = false;
        for gauge in &mut self.gauges {
            let before = (gauge.percent(), gauge.severity());
            gauge.tick(speed);
            changed |= before != (gauge.percent(), gauge.severity());
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gauge(current: f64, target: f64) -> GaugeAnimator {
        GaugeAnimator { current, target }
    }

    #[test]
    fn first_tick_moves_by_speed_fraction() {
        let mut g = gauge(0.0, 80.0);
        g.tick(0.03);
        assert!((g.current() - 2.4).abs() < 1e-9);
        assert_eq!(g.percent(), 2);
    }

    #[test]
    fn converges_and_snaps_exactly() {
        let mut g = gauge(0.0, 80.0);
        let mut ticks = 0;
        while g.current() != g.target() {
            g.tick(0.03);
            ticks += 1;
            assert!(ticks < 500, "gauge did not converge");
        }
        assert_eq!(g.current(), 80.0);
        assert_eq!(g.percent(), 80);
    }

    #[test]
    fn never_overshoots_from_below() {
        let mut g = gauge(3.0, 97.0);
        for _ in 0..1000 {
            g.tick(0.5);
            assert!(g.current() <= 97.0);
        }
        assert_eq!(g.current(), 97.0);
    }

    #[test]
    fn animates_downward_too() {
        let mut g = gauge(90.0, 10.0);
        g.tick(0.03);
        assert!((g.current() - 87.6).abs() < 1e-9);
    }

    #[test]
    fn small_gap_snaps_immediately() {
        let mut g = gauge(40.0, 40.4);
        g.tick(0.03);
        assert_eq!(g.current(), 40.4);
    }

    #[test]
    fn targets_are_clamped() {
        let mut g = GaugeAnimator::default();
        g.set_target(140.0);
        assert_eq!(g.target(), 100.0);
        g.set_target(-3.0);
        assert_eq!(g.target(), 0.0);
        g.set_target(f64::NAN);
        assert_eq!(g.target(), 0.0);
    }

    #[test]
    fn severity_bands() {
        assert_eq!(Severity::of(0), Severity::Nominal);
        assert_eq!(Severity::of(49), Severity::Nominal);
        assert_eq!(Severity::of(50), Severity::Warning);
        assert_eq!(Severity::of(79), Severity::Warning);
        assert_eq!(Severity::of(80), Severity::Critical);
        assert_eq!(Severity::of(100), Severity::Critical);
    }

    #[test]
    fn severity_follows_truncated_display() {
        // 79.9 displays as 79
        let g = gauge(79.9, 79.9);
        assert_eq!(g.percent(), 79);
        assert_eq!(g.severity(), Severity::Warning);
    }

    #[test]
    fn average_gauge_gets_mean_target() {
        let mut gauges = CpuGauges::new(4);
        gauges.update_targets(&[10.0, 20.0, 30.0, 40.0]);
        assert_eq!(gauges.average().target(), 25.0);
        assert_eq!(gauges.core(0).map(|g| g.target()), Some(10.0));
        assert_eq!(gauges.core(3).map(|g| g.target()), Some(40.0));
        assert!(gauges.core(4).is_none());
    }

    #[test]
    fn extra_readings_are_ignored_and_empty_keeps_targets() {
        let mut gauges = CpuGauges::new(2);
        gauges.update_targets(&[50.0, 60.0, 70.0]);
        assert_eq!(gauges.average().target(), 60.0);
        assert_eq!(gauges.core(1).map(|g| g.target()), Some(60.0));

        gauges.update_targets(&[]);
        assert_eq!(gauges.average().target(), 60.0);
    }

    #[test]
    fn animate_reports_display_changes() {
        let mut gauges = CpuGauges::new(1);
        assert!(!gauges.animate(0.03));

        gauges.update_targets(&[100.0]);
        assert!(gauges.animate(0.03));

        let mut settled = CpuGauges::new(1);
        settled.update_targets(&[0.2]);
        // snaps to 0.2, still displays 0
        assert!(!settled.animate(0.03));
    }
}
