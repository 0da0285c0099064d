//! sysdash - live terminal dashboard for CPU, network, disk and processes.
//!
//! Usage:
//!   sysdash                      # dashboard for this host
//!   sysdash --disk-path /home    # report free space of the /home filesystem
//!   sysdash --demo               # synthetic data, runs anywhere
//!   sysdash -v --log-file d.log  # debug logging to d.log

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use sysdash::DashboardConfig;
use sysdash::collector::mock::SyntheticProvider;
use sysdash::collector::{MetricsProvider, SystemProvider};
use sysdash::tui::App;

/// Core count assumed for `--demo` when the host's is unknown.
const DEMO_FALLBACK_CORES: usize = 4;

/// Live terminal dashboard for host resource usage.
#[derive(Parser)]
#[command(name = "sysdash", about = "Live system dashboard")]
struct Args {
    /// Mount path whose filesystem is shown in the header.
    #[arg(long, value_name = "PATH", default_value = "/")]
    disk_path: PathBuf,

    /// Drive the dashboard from synthetic data instead of this host.
    #[arg(long)]
    demo: bool,

    /// Log file (the terminal is taken by the dashboard).
    /// Default: <tmp>/sysdash.log
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(path: PathBuf, verbose: u8, quiet: bool) -> io::Result<()> {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    match format!("sysdash={}", level).parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("Warning: invalid log directive: {}", e),
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("sysdash.log"));
    if let Err(e) = init_logging(log_path.clone(), args.verbose, args.quiet) {
        eprintln!("Warning: cannot open log file {}: {}", log_path.display(), e);
    }

    let config = DashboardConfig::default().with_disk_usage_path(args.disk_path);
    let provider: Box<dyn MetricsProvider> = if args.demo {
        let cores = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(DEMO_FALLBACK_CORES);
        info!(cores, "starting in demo mode");
        Box::new(SyntheticProvider::new(cores))
    } else {
        info!(disk_path = %config.disk_usage_path.display(), "starting");
        Box::new(SystemProvider::new())
    };

    if let Err(e) = App::new(provider, config).run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
