//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "EDDIE_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/eddie/logs/` because the terminal page
/// owns stdout. Log level is controlled by the `EDDIE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// EDDIE_LOG=debug cargo run
/// EDDIE_LOG=eddie_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "eddie.log");

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("eddie=info,warn"));

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
    tracing::info!("EDDIE starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    Ok(log_dir_under(dirs::data_local_dir()))
}

/// `<data dir>/eddie/logs`, or relative to the working directory without one
fn log_dir_under(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eddie")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_under_data_dir() {
        let dir = log_dir_under(Some(PathBuf::from("/data")));
        assert_eq!(dir, PathBuf::from("/data/eddie/logs"));
    }

    #[test]
    fn test_log_dir_without_data_dir_is_relative() {
        assert_eq!(log_dir_under(None), PathBuf::from("./eddie/logs"));
    }
}
