//! # svcdesc
//!
//! **Machine-readable service descriptors**
//!
//! A descriptor lets deployment scripts, service registries, API gateways
//! and documentation generators discover a service's shape without reading
//! its source:
//!
//! - identity (`domain/title@version`), type, protocol, privacy
//! - where to fetch the API contract
//! - configs, flags and call parameters, with their required sets
//! - dependencies on other services
//!
//! ## Quick Start
//!
//! ```no_run
//! use svcdesc::prelude::*;
//!
//! fn main() -> Result<(), DescriptorError> {
//!     // Bootstrap: Service.yaml, --service-port, --service-host/$SERVICE_HOST
//!     let service = RuntimeOptions::from_env()
//!         .with_service_port("8080")
//!         .resolve()?;
//!
//!     for key in service.configs.required_keys() {
//!         println!("required config: {key}");
//!     }
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/svcdesc/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export the descriptor model
pub use svcdesc_core as core;

// Re-export loading and runtime binding
pub use svcdesc_config as config;

// Re-export logging setup
pub use svcdesc_telemetry as telemetry;

pub mod cli;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commonly used types.
pub mod prelude {
    pub use svcdesc_config::{
        load_from_file, load_from_json, resolve_runtime, to_json, DescriptorError,
        DescriptorLoader, Format, RuntimeOptions,
    };
    pub use svcdesc_core::{
        ApiDefinition, Config, Flag, Keyed, KeyedSet, ModelError, Parameter, Service, ServiceId,
    };
}
