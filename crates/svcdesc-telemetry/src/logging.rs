//! Structured logging setup.
//!
//! Output is either JSON (one object per event, for machines) or the
//! human-readable pretty format.

use crate::error::TelemetryError;
use crate::TelemetryResult;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether logging is enabled.
    pub enabled: bool,

    /// Filter directive (e.g., "info", "svcdesc_config=debug").
    pub level: String,

    /// Whether to output JSON format.
    pub json_format: bool,

    /// Whether to include file/line info.
    pub file_line_info: bool,

    /// Whether to include target (module path).
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "warn".to_string(),
            json_format: false,
            file_line_info: false,
            include_target: true,
        }
    }
}

impl LogConfig {
    /// Creates a development configuration with human-readable output.
    #[must_use]
    pub fn development() -> Self {
        Self {
            enabled: true,
            level: "debug".to_string(),
            json_format: false,
            file_line_info: true,
            include_target: true,
        }
    }

    /// Creates a production configuration with JSON output.
    #[must_use]
    pub fn production() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            json_format: true,
            file_line_info: false,
            include_target: true,
        }
    }

    /// Sets the filter directive.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Selects JSON output.
    #[must_use]
    pub fn with_json(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }
}

/// Initializes the logging subsystem.
///
/// Events are written to stderr so command output on stdout stays
/// machine-readable.
///
/// # Errors
///
/// Returns `TelemetryError::LoggingInit` if the filter is invalid or a
/// global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> TelemetryResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let filter = create_env_filter(&config.level)?;

    if config.json_format {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_target(config.include_target)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_target(config.include_target)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    }

    Ok(())
}

/// Creates an env filter from a string.
///
/// # Errors
///
/// Returns error if the filter string is invalid.
pub fn create_env_filter(filter: &str) -> TelemetryResult<EnvFilter> {
    EnvFilter::try_new(filter)
        .map_err(|e| TelemetryError::LoggingInit(format!("Invalid log level: {e}")))
}
