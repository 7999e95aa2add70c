//! Diagnostic logging setup.
//!
//! Library code logs through `tracing` macros; the binary installs a
//! `tracing-subscriber` formatter once at startup. Logs go to stderr so that
//! shared or exported text on stdout stays clean. `RUST_LOG`, when set, takes
//! precedence over the configured level.

use std::env;
use std::io;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level to display.
    pub level: Level,

    /// Include the module path (e.g. `meal_combo_planner_rs::finder`).
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            include_target: level >= Level::DEBUG,
        }
    }
}

/// Parse a log level name (case-insensitive), falling back to WARN.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to warn. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    if env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::default().add_directive(LevelFilter::from_level(config.level).into())
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(&config);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(config.include_target),
            )
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("Info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_invalid() {
        assert_eq!(parse_level("loud"), Level::WARN);
        assert_eq!(parse_level(""), Level::WARN);
    }

    #[test]
    fn test_with_level_shows_targets_when_verbose() {
        assert!(LoggingConfig::with_level(Level::TRACE).include_target);
        assert!(LoggingConfig::with_level(Level::DEBUG).include_target);
        assert!(!LoggingConfig::with_level(Level::INFO).include_target);
        assert!(!LoggingConfig::default().include_target);
    }
}
