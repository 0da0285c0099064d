//! TUI widgets for sysdash.

mod cpu;
mod header;
mod processes;
mod traffic;

pub use cpu::{render_cpu_gauges, render_cpu_title};
pub use header::{render_footer, render_header};
pub use processes::render_processes;
pub use traffic::{render_disk, render_network};
