//! Logging for svcdesc tools.
//!
//! Library crates only emit events through the [`tracing`] facade. Binaries
//! install a subscriber once at startup with [`init_logging`].
//!
//! ```rust,ignore
//! use svcdesc_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development())?;
//! tracing::info!(service = "duckbunny/service@0.1", "descriptor loaded");
//! ```

#![doc(html_root_url = "https://docs.rs/svcdesc-telemetry/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
