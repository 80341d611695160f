//! File-based logging bootstrap
//!
//! The dashboard owns stdout for its report output, so diagnostics go
//! to a daily-rolling file instead. Verbosity comes from `LPORTAL_LOG`
//! (standard env-filter syntax, e.g. `LPORTAL_LOG=portal_app=debug`).

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_ENV_VAR: &str = "LPORTAL_LOG";
const LOG_FILE_PREFIX: &str = "lportal.log";
const DEFAULT_FILTER: &str = "learner_portal=info,portal_core=info,portal_app=info,warn";

/// Set up the global subscriber writing to the session log file.
pub fn init() -> Result<()> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::ChronoLocal::new("%H:%M:%S%.3f".to_string())),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %dir.display(),
        "Session log opened"
    );
    Ok(())
}

/// Directory the rolling appender writes into.
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("learner-portal")
        .join("logs")
}

/// Path of today's log file.
pub fn current_log_file() -> PathBuf {
    log_dir().join(LOG_FILE_PREFIX)
}
