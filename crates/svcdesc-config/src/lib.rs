//! Loading and runtime binding for service descriptors.
//!
//! This crate turns descriptor files into [`Service`](svcdesc_core::Service)
//! values and binds the runtime-only fields at process start:
//! - YAML, JSON and TOML descriptors (YAML is native)
//! - Typed errors distinguishing absent, unreadable and malformed files
//! - Runtime port/host resolution with flag over environment precedence
//!
//! # Example
//!
//! ```no_run
//! use svcdesc_config::{load_from_file, RuntimeOptions};
//! use svcdesc_core::KeyedSet;
//!
//! # fn main() -> Result<(), svcdesc_config::DescriptorError> {
//! // Introspection only: no port or host needed
//! let service = load_from_file("Service.yaml")?;
//! println!("required flags: {:?}", service.flags.required_keys());
//!
//! // Process bootstrap: bind port and host
//! let service = RuntimeOptions::from_env()
//!     .with_service_port("8080")
//!     .resolve()?;
//! println!("serving on {}", service.runtime().unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! # Descriptor File Format
//!
//! ```yaml
//! Title: service
//! Domain: duckbunny
//! Version: "0.1"
//! Type: test
//! Protocol: http
//! APIDefinition:
//!   Type: swagger
//!   LocationType: vcs
//!   VCS:
//!     Location: https://github.com/duckbunny/service.git
//!     Type: git
//!     File: definition.json
//! Private: false
//! Requires:
//!   - Title: service2
//!     Domain: duckbunny
//!     Version: "0.1"
//! Configs:
//!   - Key: testconfig1
//!     Required: true
//!     Description: My first test config
//! Flags:
//!   - Key: test
//!     Env: TESTVAR
//!     Required: true
//!     Description: This is a test flag.
//! ```
//!
//! JSON descriptors use the same keys in camelCase (`title`,
//! `apiDefinition`, `locationType`, ...). Either spelling is accepted in
//! every format.

#![warn(missing_docs)]

mod error;
mod format;
mod loader;
mod runtime;

pub use error::{DescriptorError, DescriptorResult};
pub use format::Format;
pub use loader::{
    load_from_file, load_from_json, load_from_str, load_from_yaml, to_json, to_json_pretty,
    to_yaml, DescriptorLoader,
};
pub use runtime::{
    bind_runtime, resolve_runtime, resolve_runtime_with, RuntimeOptions, DEFAULT_SERVICE_FILE,
    SERVICE_HOST_ENV,
};
