//! Logging configuration and initialization for Postboard.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Parse log level string to tracing Level.
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Build the filter for the given level.
///
/// sqlx logs every statement at INFO, so it is capped at WARN unless
/// `RUST_LOG` says otherwise.
fn build_filter(level: &str) -> EnvFilter {
    let level = parse_level(level);
    let mut filter = EnvFilter::from_default_env().add_directive(level.into());
    if std::env::var("RUST_LOG").is_err() {
        if let Ok(directive) = "sqlx=warn".parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Initialize the logging system with the given configuration.
///
/// Writes to both stdout and the configured log file.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.level);

    if let Some(parent) = Path::new(&config.file).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let log_file = Arc::new(File::create(&config.file)?);
    let writer = std::io::stdout.and(log_file);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .init();

    Ok(())
}

/// Initialize console-only logging (for development/testing).
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(true)
                .with_target(true),
        )
        .with(build_filter(level))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warning"), Level::WARN);
        assert_eq!(parse_level("ERROR"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_default() {
        assert_eq!(parse_level("invalid"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_build_filter_caps_sqlx() {
        // RUST_LOG takes over when set
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }

        let filter = build_filter("debug").to_string();
        assert!(filter.contains("sqlx=warn"), "filter was {filter}");
        assert!(filter.contains("debug"), "filter was {filter}");
    }

    #[test]
    fn test_build_filter_unknown_level_is_info() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }

        let filter = build_filter("loud").to_string();
        assert!(filter.contains("info"), "filter was {filter}");
        assert!(!filter.contains("debug"), "filter was {filter}");
    }
}
