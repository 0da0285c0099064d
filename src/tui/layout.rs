//! Widget geometry.
//!
//! Geometry is always recomputed from scratch from the terminal size and the
//! core count. Rectangles may extend past the terminal on small screens; the
//! renderer clips them to the frame.

use ratatui::layout::Rect;

pub const HEADER_HEIGHT: u16 = 3;
pub const GAUGE_HEIGHT: u16 = 3;
pub const STATS_HEIGHT: u16 = 4;
pub const GRAPH_HEIGHT: u16 = 9;
const CPU_TITLE_Y: u16 = 3;
const AVERAGE_GAUGE_Y: u16 = 4;
/// First row of the per-core gauge grid.
const CORE_GRID_Y: u16 = 7;

/// Rectangles of every dashboard widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutGeometry {
    pub header: Rect,
    pub cpu_title: Rect,
    pub average_gauge: Rect,
    /// One per core, in core order.
    pub core_gauges: Vec<Rect>,
    pub network_stats: Rect,
    pub network_graph: Rect,
    pub disk_stats: Rect,
    pub disk_graph: Rect,
    pub processes: Rect,
    pub footer: Rect,
}

fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Height used by the CPU section: title, average gauge and the core grid.
pub fn cpu_section_height(cores: usize) -> u16 {
    let rows = cores.div_ceil(2);
    let height = usize::from(CORE_GRID_Y) + rows * usize::from(GAUGE_HEIGHT);
    u16::try_from(height).unwrap_or(u16::MAX)
}

impl LayoutGeometry {
    /// Lays out the dashboard for a `width` x `height` terminal.
    ///
    /// Cores are split over two columns: the first `cores / 2` on the left,
    /// the rest on the right, which extends to the terminal's right edge.
    pub fn compute(width: u16, height: u16, cores: usize) -> Self {
        let column_width = width / 2;
        let left_count = cores / 2;

        let core_gauges = (0..cores)
            .map(|i| {
                let (x, w, row) = if i < left_count {
                    (0, column_width, i)
                } else {
                    (column_width, width - column_width, i - left_count)
                };
                let y = usize::from(CORE_GRID_Y) + row * usize::from(GAUGE_HEIGHT);
                rect(x, u16::try_from(y).unwrap_or(u16::MAX), w, GAUGE_HEIGHT)
            })
            .collect();

        let cpu_height = cpu_section_height(cores);
        let network_stats = rect(0, cpu_height, width, STATS_HEIGHT);
        let network_graph = rect(0, network_stats.bottom(), width, GRAPH_HEIGHT);
        let disk_stats = rect(0, network_graph.bottom(), width, STATS_HEIGHT);
        let disk_graph = rect(0, disk_stats.bottom(), width, GRAPH_HEIGHT);

        let footer_y = height.saturating_sub(1);
        let processes_y = disk_graph.bottom();
        let processes = rect(0, processes_y, width, footer_y.saturating_sub(processes_y));

        Self {
            header: rect(0, 0, width, HEADER_HEIGHT),
            cpu_title: rect(0, CPU_TITLE_Y, width, 1),
            average_gauge: rect(0, AVERAGE_GAUGE_Y, width, GAUGE_HEIGHT),
            core_gauges,
            network_stats,
            network_graph,
            disk_stats,
            disk_graph,
            processes,
            footer: rect(0, footer_y, width, height.min(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_rows_span_full_width() {
        let layout = LayoutGeometry::compute(120, 80, 4);
        assert_eq!(layout.header, rect(0, 0, 120, 3));
        assert_eq!(layout.cpu_title, rect(0, 3, 120, 1));
        assert_eq!(layout.average_gauge, rect(0, 4, 120, 3));
        assert_eq!(layout.footer, rect(0, 79, 120, 1));
    }

    #[test]
    fn cores_split_into_two_columns() {
        let layout = LayoutGeometry::compute(101, 80, 4);
        assert_eq!(
            layout.core_gauges,
            vec![
                rect(0, 7, 50, 3),
                rect(0, 10, 50, 3),
                rect(50, 7, 51, 3),
                rect(50, 10, 51, 3),
            ]
        );
    }

    #[test]
    fn odd_core_count_puts_extra_core_on_the_right() {
        let layout = LayoutGeometry::compute(80, 60, 3);
        assert_eq!(layout.core_gauges[0], rect(0, 7, 40, 3));
        assert_eq!(layout.core_gauges[1], rect(40, 7, 40, 3));
        assert_eq!(layout.core_gauges[2], rect(40, 10, 40, 3));
        assert_eq!(cpu_section_height(3), 13);
    }

    #[test]
    fn sections_stack_below_cpu_grid() {
        let layout = LayoutGeometry::compute(80, 60, 4);
        assert_eq!(cpu_section_height(4), 13);
        assert_eq!(layout.network_stats, rect(0, 13, 80, 4));
        assert_eq!(layout.network_graph, rect(0, 17, 80, 9));
        assert_eq!(layout.disk_stats, rect(0, 26, 80, 4));
        assert_eq!(layout.disk_graph, rect(0, 30, 80, 9));
        assert_eq!(layout.processes, rect(0, 39, 80, 20));
    }

    #[test]
    fn single_core_sits_in_right_column() {
        let layout = LayoutGeometry::compute(80, 40, 1);
        assert_eq!(layout.core_gauges, vec![rect(40, 7, 40, 3)]);
        assert_eq!(cpu_section_height(1), 10);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let layout = LayoutGeometry::compute(10, 5, 16);
        assert_eq!(layout.processes.height, 0);
        assert_eq!(layout.footer, rect(0, 4, 10, 1));

        let empty = LayoutGeometry::compute(0, 0, 2);
        assert_eq!(empty.footer, rect(0, 0, 0, 0));
    }

    #[test]
    fn recompute_is_deterministic() {
        let a = LayoutGeometry::compute(132, 43, 8);
        let b = LayoutGeometry::compute(132, 43, 8);
        assert_eq!(a, b);
        assert_ne!(a, LayoutGeometry::compute(200, 43, 8));
    }
}
