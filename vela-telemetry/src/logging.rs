//! Logging configuration and subscriber setup.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// Errors from logging setup.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The configured log level could not be parsed.
    #[error("[Telemetry] Invalid log level '{value}'")]
    InvalidLevel {
        /// The value that failed to parse.
        value: String,
    },

    /// A global subscriber was already installed.
    #[error("[Telemetry] Logging already initialized")]
    AlreadyInitialized,
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level (e.g., "info", "debug", "trace")
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// Include span enter/exit events
    #[serde(default)]
    pub include_span_events: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            include_span_events: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format for log aggregation systems
    Json,
    /// Human-readable format for development
    #[default]
    Pretty,
}

/// Installs the global tracing subscriber per the given config.
///
/// The `RUST_LOG` environment variable, when set, overrides the
/// configured level.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidLevel` if the level does not parse
/// and `TelemetryError::AlreadyInitialized` if a subscriber is already
/// installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.level).map_err(|_| TelemetryError::InvalidLevel {
            value: config.level.clone(),
        })
    })?;

    let span_events = if config.include_span_events {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(span_events)
        .with_target(false);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    result.map_err(|_| TelemetryError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.include_span_events);
    }

    #[test]
    fn test_config_serialization() {
        let config = LogConfig {
            level: "debug".to_string(),
            format: LogFormat::Json,
            include_span_events: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: LogConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.level, "debug");
        assert_eq!(parsed.format, LogFormat::Json);
        assert!(parsed.include_span_events);
    }

    #[test]
    fn test_log_format_parses_lowercase() {
        let format: LogFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, LogFormat::Json);
    }

    #[test]
    fn test_init_logging_invalid_level() {
        let config = LogConfig {
            level: "!!not-a-level".to_string(),
            ..LogConfig::default()
        };
        // RUST_LOG may short-circuit level parsing; only assert on the
        // error shape when the env override is absent.
        if std::env::var("RUST_LOG").is_err() {
            let result = init_logging(&config);
            assert!(matches!(
                result,
                Err(TelemetryError::InvalidLevel { .. }) | Err(TelemetryError::AlreadyInitialized)
            ));
        }
    }
}
