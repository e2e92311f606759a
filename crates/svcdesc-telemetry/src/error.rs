//! Telemetry error types.

use thiserror::Error;

/// Errors that can occur while setting up telemetry.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Failed to initialize logging.
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TelemetryError::LoggingInit("failed".to_string());
        assert_eq!(err.to_string(), "Failed to initialize logging: failed");
    }
}
