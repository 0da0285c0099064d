//! Fixed-capacity sliding series backing the scrolling graphs.

use crate::scale::AdaptiveScale;

/// Ordered samples, oldest first, newest at the last index.
///
/// The series is zero-filled at construction and its length always equals
/// its capacity. Appending shifts every sample one slot toward the head and
/// drops the oldest one.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySeries {
    values: Vec<f64>,
}

impl HistorySeries {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: vec![0.0; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Most recent sample.
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn append(&mut self, value: f64) {
        let Some(last) = self.values.len().checked_sub(1) else {
            return;
        };
        self.values.copy_within(1.., 0);
        self.values[last] = value;
    }

    /// Grows to `capacity`, keeping recent samples at the tail.
    ///
    /// Smaller capacities are ignored: the series never shrinks.
    pub fn grow(&mut self, capacity: usize) {
        let old = self.values.len();
        if capacity <= old {
            return;
        }
        let mut values = vec![0.0; capacity];
        values[capacity - old..].copy_from_slice(&self.values);
        self.values = values;
    }

    /// Largest sample, 0 for an empty series.
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// The last `width` samples as `(x, y)` chart points, `x` counting from 0.
    pub fn tail_points(&self, width: usize) -> Vec<(f64, f64)> {
        let start = self.values.len().saturating_sub(width);
        self.values[start..]
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect()
    }
}

/// Two series plotted together on one shared, auto-scaled axis.
///
/// Network uses it for receive/transmit, disk for read/write.
#[derive(Debug, Clone, PartialEq)]
pub struct DualHistory {
    pub primary: HistorySeries,
    pub secondary: HistorySeries,
    pub scale: AdaptiveScale,
}

impl DualHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            primary: HistorySeries::new(capacity),
            secondary: HistorySeries::new(capacity),
            scale: AdaptiveScale::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.primary.capacity()
    }

    /// Records one sample per series and updates the shared scale.
    pub fn push(&mut self, primary: f64, secondary: f64) {
        self.primary.append(primary);
        self.secondary.append(secondary);
        self.scale.observe(&self.primary, &self.secondary);
    }

    pub fn grow(&mut self, capacity: usize) {
        self.primary.grow(capacity);
        self.secondary.grow(capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_series_is_zero_filled() {
        let series = HistorySeries::new(100);
        assert_eq!(series.capacity(), 100);
        assert!(series.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn append_writes_tail_and_keeps_order() {
        let mut series = HistorySeries::new(5);
        for v in [1.0, 2.0, 3.0] {
            series.append(v);
            assert_eq!(series.latest(), Some(v));
            assert_eq!(series.capacity(), 5);
        }
        assert_eq!(series.values(), &[0.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn append_drops_oldest_when_full() {
        let mut series = HistorySeries::new(3);
        for v in 1..=5 {
            series.append(v as f64);
        }
        assert_eq!(series.values(), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn append_on_empty_series_is_noop() {
        let mut series = HistorySeries::new(0);
        series.append(1.0);
        assert_eq!(series.capacity(), 0);
        assert_eq!(series.latest(), None);
    }

    #[test]
    fn grow_preserves_tail_history() {
        // widening resize from 80 columns to 200
        let mut series = HistorySeries::new(100);
        for _ in 0..100 {
            series.append(5.0);
        }
        series.grow(200);

        assert_eq!(series.capacity(), 200);
        assert!(series.values()[..100].iter().all(|&v| v == 0.0));
        assert!(series.values()[100..].iter().all(|&v| v == 5.0));
    }

    #[test]
    fn grow_keeps_recency_order() {
        let mut series = HistorySeries::new(4);
        for v in [1.0, 2.0, 3.0, 4.0] {
            series.append(v);
        }
        series.grow(6);
        assert_eq!(series.values(), &[0.0, 0.0, 1.0, 2.0, 3.0, 4.0]);

        series.append(5.0);
        assert_eq!(series.values(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn grow_never_shrinks() {
        let mut series = HistorySeries::new(150);
        series.append(7.0);
        series.grow(100);
        assert_eq!(series.capacity(), 150);
        assert_eq!(series.latest(), Some(7.0));
    }

    #[test]
    fn tail_points_tolerate_narrow_views() {
        let mut series = HistorySeries::new(6);
        for v in 1..=6 {
            series.append(v as f64);
        }
        assert_eq!(series.tail_points(3), vec![(0.0, 4.0), (1.0, 5.0), (2.0, 6.0)]);
        assert_eq!(series.tail_points(10).len(), 6);
    }

    #[test]
    fn dual_history_shares_scale() {
        let mut history = DualHistory::new(100);
        history.push(10.0, 2.0);
        // 0.1 + (10 - 0.1) * 0.3
        assert!((history.scale.current_max() - 3.07).abs() < 1e-9);
        assert_eq!(history.primary.latest(), Some(10.0));
        assert_eq!(history.secondary.latest(), Some(2.0));

        history.grow(120);
        assert_eq!(history.capacity(), 120);
        assert_eq!(history.secondary.capacity(), 120);
    }
}
