//! Auto-scaling ceiling for history graphs.
//!
//! The ceiling rises quickly toward a new peak and decays slowly once the
//! peak drops well below it, so bursts show up at once while quiet periods do
//! not make the graph rescale on every tick.

use crate::history::HistorySeries;

/// Lowest allowed ceiling.
pub const SCALE_FLOOR: f64 = 0.1;

/// Fraction of the gap closed per tick when the peak is above the ceiling.
const GROW_FACTOR: f64 = 0.3;

/// Fraction of the gap closed per tick when the peak is far below it.
const DECAY_FACTOR: f64 = 0.05;

/// Decay starts only once the peak falls under this share of the ceiling.
const DECAY_THRESHOLD: f64 = 0.5;

/// Ceilings at or below this value never decay.
const DECAY_MIN_CEILING: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveScale {
    current_max: f64,
}

impl Default for AdaptiveScale {
    fn default() -> Self {
        Self {
            current_max: SCALE_FLOOR,
        }
    }
}

impl AdaptiveScale {
    pub fn current_max(&self) -> f64 {
        self.current_max
    }

    /// Adapts the ceiling to the peak of both series.
    pub fn observe(&mut self, a: &HistorySeries, b: &HistorySeries) {
        self.update(a.max().max(b.max()));
    }

    /// Adapts the ceiling to an observed peak.
    pub fn update(&mut self, peak: f64) {
        if peak > self.current_max {
            self.current_max += (peak - self.current_max) * GROW_FACTOR;
        } else if peak < self.current_max * DECAY_THRESHOLD
            && self.current_max > DECAY_MIN_CEILING
        {
            self.current_max -= (self.current_max - peak) * DECAY_FACTOR;
        }
        self.current_max = self.current_max.max(SCALE_FLOOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn starts_at_floor() {
        assert_eq!(AdaptiveScale::default().current_max(), SCALE_FLOOR);
    }

    #[test]
    fn grows_fast_toward_peak() {
        let mut scale = AdaptiveScale::default();
        scale.update(100.1);
        assert!(close(scale.current_max(), 0.1 + 100.0 * 0.3));

        let before = scale.current_max();
        scale.update(100.1);
        assert!(scale.current_max() > before);
        assert!(scale.current_max() < 100.1);
    }

    #[test]
    fn decays_slowly_when_peak_drops() {
        let mut scale = AdaptiveScale { current_max: 100.0 };
        scale.update(10.0);
        assert!(close(scale.current_max(), 100.0 - 90.0 * 0.05));
    }

    #[test]
    fn holds_when_peak_is_moderately_lower() {
        let mut scale = AdaptiveScale { current_max: 100.0 };
        scale.update(60.0);
        assert_eq!(scale.current_max(), 100.0);
    }

    #[test]
    fn small_ceilings_do_not_decay() {
        let mut scale = AdaptiveScale { current_max: 0.9 };
        scale.update(0.0);
        assert_eq!(scale.current_max(), 0.9);
    }

    #[test]
    fn never_drops_below_floor() {
        let mut scale = AdaptiveScale::default();
        for peak in [0.0, -5.0, 3.0, 0.0, 0.0, 1e6, 0.0, f64::NAN, 0.0] {
            scale.update(peak);
            assert!(scale.current_max() >= SCALE_FLOOR);
        }
        for _ in 0..10_000 {
            scale.update(0.0);
        }
        assert!(scale.current_max() >= SCALE_FLOOR);
    }

    #[test]
    fn upward_step_is_monotonic() {
        let mut scale = AdaptiveScale::default();
        let mut prev = scale.current_max();
        for peak in [1.0, 5.0, 5.0, 20.0, 50.0] {
            scale.update(peak);
            assert!(scale.current_max() >= prev);
            prev = scale.current_max();
        }
    }

    #[test]
    fn observe_uses_peak_of_both_series() {
        let mut rx = HistorySeries::new(4);
        let mut tx = HistorySeries::new(4);
        rx.append(2.0);
        tx.append(8.0);

        let mut scale = AdaptiveScale::default();
        scale.observe(&rx, &tx);
        assert!(close(scale.current_max(), 0.1 + (8.0 - 0.1) * 0.3));
    }
}
