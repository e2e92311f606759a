//! Runtime binding of a loaded descriptor.
//!
//! A process resolves its own descriptor once at startup: it loads the
//! descriptor file and binds the serving port and host. The three bootstrap
//! values live in [`RuntimeOptions`], built once at process entry and passed
//! explicitly to [`resolve_runtime`].
//!
//! Host precedence is command-line flag over `SERVICE_HOST`: the environment
//! value is read once when the options are built and only acts as the
//! default of the host option.

use std::path::{Path, PathBuf};

use svcdesc_core::{RuntimeBinding, Service};
use tracing::debug;

use crate::{load_from_file, DescriptorError, DescriptorResult};

/// Default descriptor path.
pub const DEFAULT_SERVICE_FILE: &str = "Service.yaml";

/// Environment variable providing the default serving host.
pub const SERVICE_HOST_ENV: &str = "SERVICE_HOST";

/// Bootstrap values for resolving this process's own descriptor.
///
/// # Example
///
/// ```no_run
/// use svcdesc_config::RuntimeOptions;
///
/// # fn main() -> Result<(), svcdesc_config::DescriptorError> {
/// let service = RuntimeOptions::from_env()
///     .with_service_port("8080")
///     .resolve()?;
///
/// println!("serving {} on {}", service.id(), service.runtime().unwrap());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// Path to the descriptor file.
    pub service_file: PathBuf,
    /// Port the service will serve from.
    pub service_port: Option<String>,
    /// Hostname the service will serve from.
    pub service_host: Option<String>,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            service_file: PathBuf::from(DEFAULT_SERVICE_FILE),
            service_port: None,
            service_host: None,
        }
    }
}

impl RuntimeOptions {
    /// Create options with the default file and no port or host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options whose host defaults to `$SERVICE_HOST`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Create options whose host defaults to `getenv("SERVICE_HOST")`.
    pub fn from_env_with<F>(getenv: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            service_host: getenv(SERVICE_HOST_ENV).filter(|h| !h.is_empty()),
            ..Self::default()
        }
    }

    /// Set the descriptor path.
    #[must_use]
    pub fn with_service_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.service_file = path.into();
        self
    }

    /// Set the serving port.
    #[must_use]
    pub fn with_service_port(mut self, port: impl Into<String>) -> Self {
        self.service_port = Some(port.into());
        self
    }

    /// Set the serving host, overriding any environment default.
    #[must_use]
    pub fn with_service_host(mut self, host: impl Into<String>) -> Self {
        self.service_host = Some(host.into());
        self
    }

    /// Resolve the descriptor these options point to.
    ///
    /// # Errors
    ///
    /// See [`resolve_runtime`].
    pub fn resolve(&self) -> DescriptorResult<Service> {
        resolve_runtime(self)
    }
}

/// Load the descriptor named by `options` and bind its port and host.
///
/// Steps run in order, each failing before the next is attempted:
/// 1. load `service_file`
/// 2. bind the port, [`DescriptorError::NoPort`] if unset or empty
/// 3. bind the host, [`DescriptorError::NoHost`] if unset or empty
///
/// # Errors
///
/// Returns any error of [`load_from_file`], `NoPort` or `NoHost`.
pub fn resolve_runtime(options: &RuntimeOptions) -> DescriptorResult<Service> {
    let service = load_from_file(&options.service_file)?;
    bind_runtime(
        service,
        options.service_port.as_deref(),
        options.service_host.as_deref(),
    )
}

/// Resolve from the four raw bootstrap sources.
///
/// The host flag wins over the environment value when non-empty. Empty
/// strings count as unset.
///
/// # Errors
///
/// See [`resolve_runtime`].
pub fn resolve_runtime_with(
    service_file: impl AsRef<Path>,
    port_flag: &str,
    host_flag: &str,
    host_env: &str,
) -> DescriptorResult<Service> {
    let host = if host_flag.is_empty() {
        host_env
    } else {
        host_flag
    };

    let options = RuntimeOptions {
        service_file: service_file.as_ref().to_path_buf(),
        service_port: Some(port_flag.to_string()),
        service_host: Some(host.to_string()),
    };
    resolve_runtime(&options)
}

/// Bind port and host to an already loaded descriptor.
///
/// # Errors
///
/// Returns [`DescriptorError::NoPort`] or [`DescriptorError::NoHost`] for a
/// missing value, and `AlreadyBound` (wrapped in
/// [`DescriptorError::Model`]) if `service` was bound before.
pub fn bind_runtime(
    mut service: Service,
    port: Option<&str>,
    host: Option<&str>,
) -> DescriptorResult<Service> {
    let port = port
        .filter(|p| !p.is_empty())
        .ok_or(DescriptorError::NoPort)?;
    let host = host
        .filter(|h| !h.is_empty())
        .ok_or(DescriptorError::NoHost)?;

    service.bind_runtime(RuntimeBinding::new(port, host))?;
    debug!(service = %service.id(), port, host, "service runtime bound");

    Ok(service)
}
