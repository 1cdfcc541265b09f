use crate::tui::constants::{NOTIFICATION_DISMISS_MS, REGISTRY_LATENCY_MS, SPINNER_TICK_MS};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "cmdbar",
    version,
    about = "Terminal schema-registry browser with stacked notification bars",
    long_about = None
)]
pub struct Cli {
    /// Spinner frame interval in milliseconds
    #[arg(long, env = "CMDBAR_TICK_MS", default_value_t = SPINNER_TICK_MS)]
    pub tick_ms: u64,

    /// How long success notifications stay visible, in milliseconds
    #[arg(long, env = "CMDBAR_DISMISS_MS", default_value_t = NOTIFICATION_DISMISS_MS)]
    pub dismiss_ms: u64,

    /// Simulated registry latency in milliseconds
    #[arg(long, env = "CMDBAR_LATENCY_MS", default_value_t = REGISTRY_LATENCY_MS)]
    pub latency_ms: u64,

    /// Make every subject deletion fail
    #[arg(long)]
    pub fail_deletes: bool,

    /// JSON file with the subjects to start with (default: a built-in demo set)
    #[arg(short, long, env = "CMDBAR_SUBJECTS")]
    pub subjects: Option<PathBuf>,

    /// Where to write logs (default: <cache dir>/cmdbar/cmdbar.log)
    #[arg(long, env = "CMDBAR_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Delays the command bars work with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub tick_interval: Duration,
    pub dismiss_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(SPINNER_TICK_MS),
            dismiss_delay: Duration::from_millis(NOTIFICATION_DISMISS_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub timings: Timings,
    pub registry_latency: Duration,
    pub fail_deletes: bool,
    pub subjects_file: Option<PathBuf>,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            registry_latency: Duration::from_millis(REGISTRY_LATENCY_MS),
            fail_deletes: false,
            subjects_file: None,
            log_file: default_log_file(),
            verbose: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            timings: Timings {
                tick_interval: Duration::from_millis(cli.tick_ms),
                dismiss_delay: Duration::from_millis(cli.dismiss_ms),
            },
            registry_latency: Duration::from_millis(cli.latency_ms),
            fail_deletes: cli.fail_deletes,
            subjects_file: cli.subjects,
            log_file: cli.log_file.unwrap_or_else(default_log_file),
            verbose: cli.verbose,
        }
    }
}

pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("cmdbar")
        .join("cmdbar.log")
}
