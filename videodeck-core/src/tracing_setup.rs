//! Tracing setup for Videodeck
//!
//! Console logs go to stderr at the user's chosen level so they never mix
//! with command output on stdout. A full trace of the session is written to
//! disk alongside.

use std::fs::{File, create_dir_all};
use std::path::Path;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Name of the session log inside the logs directory.
pub const SESSION_LOG: &str = "videodeck-last-run.log";

/// Console stderr layer plus a session log in `logs_dir` (default `./logs`).
///
/// The session log is overwritten on every run and records everything the
/// videodeck crates emit. `RUST_LOG` overrides the console level only.
///
/// # Errors
///
/// - `std::io::Error` - If the logs directory or session log cannot be created
pub fn init_tracing(console_level: Level, logs_dir: Option<&Path>) -> Result<(), std::io::Error> {
    let logs_dir = logs_dir.unwrap_or_else(|| Path::new("logs"));
    create_dir_all(logs_dir)?;
    let session_log = File::create(logs_dir.join(SESSION_LOG))?;

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_writer(std::io::stderr)
                .with_filter(console_filter),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(session_log)
                .with_filter(EnvFilter::new("videodeck_core=trace,videodeck=trace")),
        )
        .init();

    tracing::debug!("Session log at {}", logs_dir.join(SESSION_LOG).display());
    Ok(())
}

/// Console verbosity for `--log-level`. The player logs refusals at debug
/// and loads at info, so `Warn` keeps the console quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl CliLogLevel {
    pub fn as_tracing_level(self) -> Level {
        match self {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
        }
    }
}

// clap renders `default_value_t` through Display
impl std::fmt::Display for CliLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_tracing_level().as_str().to_lowercase())
    }
}
