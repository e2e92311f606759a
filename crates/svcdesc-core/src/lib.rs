//! # svcdesc Core
//!
//! Data model for service descriptors.
//!
//! A descriptor is a machine-readable contract describing a network
//! service's identity, API location, required configuration, command-line
//! flags and dependencies on other services. This crate holds the model and
//! its pure queries; it performs no I/O.
//!
//! - [`Service`] - Descriptor root with identity and runtime binding
//! - [`ApiDefinition`] / [`Vcs`] - Where to fetch the API contract
//! - [`Config`], [`Flag`], [`Parameter`] - Keyed settings
//! - [`KeyedSet`] - Required-set and lookup queries over keyed settings
//! - [`ModelError`] - Error types

#![doc(html_root_url = "https://docs.rs/svcdesc-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod error;
pub mod fixtures;
mod keyed;
mod service;
mod settings;

pub use api::{ApiDefinition, LocationType, Vcs};
pub use error::{ModelError, ModelResult};
pub use keyed::{Keyed, KeyedSet};
pub use service::{RuntimeBinding, Service, ServiceBuilder, ServiceId};
pub use settings::{Config, Flag, Parameter, ParameterLocation, Response};
