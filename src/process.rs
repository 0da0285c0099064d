//! Process ranking and table formatting.

use std::cmp::Ordering;

use crate::collector::ProcessRecord;

const ELLIPSIS: &str = "...";

/// One process as shown in the process table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSnapshot {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub command_line: String,
}

impl ProcessSnapshot {
    /// Builds a snapshot from a raw record.
    ///
    /// Returns `None` if the name, CPU or memory reading is missing. A
    /// missing command line falls back to the process name.
    pub fn from_record(record: ProcessRecord) -> Option<Self> {
        let name = record.name?;
        let cpu_percent = record.cpu_percent.filter(|v| v.is_finite())?;
        let memory_percent = record.memory_percent.filter(|v| v.is_finite())?;
        let command_line = record
            .command_line
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| name.clone());
        Some(Self {
            pid: record.pid,
            name,
            cpu_percent,
            memory_percent,
            command_line,
        })
    }
}

/// Converts raw records, silently dropping incomplete ones.
pub fn capture(records: Vec<ProcessRecord>) -> Vec<ProcessSnapshot> {
    records
        .into_iter()
        .filter_map(ProcessSnapshot::from_record)
        .collect()
}

/// Sorts by CPU usage, highest first. Ties keep enumeration order.
pub fn rank(mut processes: Vec<ProcessSnapshot>) -> Vec<ProcessSnapshot> {
    processes.sort_by(|a, b| {
        b.cpu_percent
            .partial_cmp(&a.cpu_percent)
            .unwrap_or(Ordering::Equal)
    });
    processes
}

/// Column widths of the process table, as shares of the available width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub name: u16,
    pub cpu: u16,
    pub memory: u16,
    pub command: u16,
}

impl ColumnWidths {
    /// Name 20%, CPU 10%, memory 10%, command 60%.
    pub fn for_width(width: u16) -> Self {
        let share = |pct: u32| (u32::from(width) * pct / 100) as u16;
        Self {
            name: share(20),
            cpu: share(10),
            memory: share(10),
            command: share(60),
        }
    }

    pub fn as_array(&self) -> [u16; 4] {
        [self.name, self.cpu, self.memory, self.command]
    }
}

/// Cuts `text` to `width` characters, ending in `...` when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width < ELLIPSIS.len() {
        return text.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// A formatted process table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRow {
    pub name: String,
    pub cpu: String,
    pub memory: String,
    pub command: String,
}

/// The ranked process list formatted for a given width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessTable {
    pub widths: ColumnWidths,
    pub rows: Vec<ProcessRow>,
}

impl ProcessTable {
    pub const HEADER: [&'static str; 4] = ["Name", "CPU%", "Mem%", "Command"];

    /// Formats ranked processes for `width` columns of usable space.
    pub fn format(processes: &[ProcessSnapshot], width: u16) -> Self {
        let widths = ColumnWidths::for_width(width);
        let rows = processes
            .iter()
            .map(|p| ProcessRow {
                name: p.name.clone(),
                cpu: format!("{:.1}", p.cpu_percent),
                memory: format!("{:.1}", p.memory_percent),
                command: truncate(&p.command_line, usize::from(widths.command)),
            })
            .collect();
        Self { widths, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pid: u32, name: &str, cpu: f64) -> ProcessRecord {
        ProcessRecord {
            pid,
            name: Some(name.to_string()),
            cpu_percent: Some(cpu),
            memory_percent: Some(1.0),
            command_line: Some(format!("/usr/bin/{}", name)),
        }
    }

    #[test]
    fn incomplete_records_are_skipped() {
        let records = vec![
            record(1, "init", 0.1),
            ProcessRecord {
                cpu_percent: None,
                ..record(2, "gone", 5.0)
            },
            ProcessRecord {
                name: None,
                ..record(3, "hidden", 5.0)
            },
            ProcessRecord {
                memory_percent: Some(f64::NAN),
                ..record(4, "odd", 5.0)
            },
            record(5, "bash", 0.0),
        ];
        let pids: Vec<u32> = capture(records).iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![1, 5]);
    }

    #[test]
    fn command_falls_back_to_name() {
        let snapshot = ProcessSnapshot::from_record(ProcessRecord {
            command_line: None,
            ..record(7, "kworker/0:1", 0.0)
        });
        assert_eq!(
            snapshot.map(|s| s.command_line),
            Some("kworker/0:1".to_string())
        );
    }

    #[test]
    fn rank_sorts_by_cpu_descending_and_is_stable() {
        let processes = capture(vec![
            record(1, "a", 1.0),
            record(2, "b", 50.0),
            record(3, "c", 1.0),
            record(4, "d", 99.5),
            record(5, "e", 1.0),
        ]);
        let ranked = rank(processes);
        let pids: Vec<u32> = ranked.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![4, 2, 1, 3, 5]);
        assert!(ranked.windows(2).all(|w| w[0].cpu_percent >= w[1].cpu_percent));
    }

    #[test]
    fn rank_treats_negative_zero_as_a_tie() {
        let ranked = rank(capture(vec![
            record(1, "a", 0.0),
            ProcessRecord {
                cpu_percent: Some(-0.0),
                ..record(2, "b", 0.0)
            },
            record(3, "c", 0.0),
            record(4, "d", 2.0),
        ]));
        let pids: Vec<u32> = ranked.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![4, 1, 2, 3]);
    }

    #[test]
    fn column_widths_are_proportional() {
        let widths = ColumnWidths::for_width(100);
        assert_eq!(widths.as_array(), [20, 10, 10, 60]);

        let widths = ColumnWidths::for_width(78);
        assert_eq!(widths.as_array(), [15, 7, 7, 46]);
    }

    #[test]
    fn truncate_adds_ellipsis_only_when_needed() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("/usr/bin/python3 -m http.server", 10), "/usr/bi...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn truncate_counts_characters() {
        let text = "журнал-обработчик";
        let cut = truncate(text, 8);
        assert_eq!(cut.chars().count(), 8);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn table_formats_rows_for_width() {
        let processes = rank(capture(vec![
            record(1, "idle", 0.0),
            ProcessRecord {
                command_line: Some("x".repeat(80)),
                memory_percent: Some(12.345),
                ..record(2, "busy", 87.66)
            },
        ]));
        let table = ProcessTable::format(&processes, 50);

        assert_eq!(table.widths.command, 30);
        assert_eq!(table.rows[0].name, "busy");
        assert_eq!(table.rows[0].cpu, "87.7");
        assert_eq!(table.rows[0].memory, "12.3");
        assert_eq!(table.rows[0].command.chars().count(), 30);
        assert!(table.rows[0].command.ends_with("..."));
        assert_eq!(table.rows[1].command, "/usr/bin/idle");
    }
}
