//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "mintel.log";

/// Used when `MINTEL_LOG` is unset: info for every workspace crate
const DEFAULT_FILTER: &str =
    "mintel=info,mintel_core=info,mintel_app=info,mintel_client=info,mintel_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/market-intel/logs/` because the TUI
/// owns stdout. Log level is controlled by the `MINTEL_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// MINTEL_LOG=debug mintel
/// MINTEL_LOG=mintel_client=trace mintel
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env("MINTEL_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Market Intel starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("market-intel").join("logs"))
}
