//! The service descriptor root.
//!
//! A [`Service`] starts life empty, is populated once from a descriptor file
//! or JSON bytes, is optionally bound to a runtime port and host at process
//! start, and is treated as immutable afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    ApiDefinition, Config, Flag, KeyedSet, ModelError, ModelResult, Parameter, Response,
};

/// Identity of a service: domain, title and version together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId {
    /// Owning domain, usually the organisation.
    pub domain: String,
    /// Service title.
    pub title: String,
    /// Service version.
    pub version: String,
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.domain, self.title, self.version)
    }
}

/// Port and host a running instance serves from.
///
/// Only applies to the local instance; never part of the portable
/// descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuntimeBinding {
    /// Serving port.
    pub port: String,
    /// Serving hostname.
    pub host: String,
}

impl RuntimeBinding {
    /// Creates a binding.
    pub fn new(port: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            host: host.into(),
        }
    }

    /// Returns `host:port`.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for RuntimeBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Service descriptor.
///
/// `title`, `domain` and `version` are mandatory when decoding; every other
/// field is optional. Entries of `requires` are references to other
/// services: only their identity is meaningful.
///
/// # Example
///
/// ```
/// use svcdesc_core::{Flag, KeyedSet, Service};
///
/// let service = Service::builder("service", "duckbunny", "0.1")
///     .protocol("http")
///     .flag(Flag::new("test", "This is a test flag.").with_env("TESTVAR").required())
///     .build();
///
/// assert_eq!(service.id().to_string(), "duckbunny/service@0.1");
/// assert_eq!(service.flags.required_keys(), vec!["test"]);
/// assert!(!service.is_runtime_bound());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Title of the service.
    #[serde(alias = "Title")]
    pub title: String,

    /// Domain of the service, often the VCS user or organisation.
    #[serde(alias = "Domain")]
    pub domain: String,

    /// Version of the service.
    #[serde(alias = "Version")]
    pub version: String,

    /// Category or type of the service.
    #[serde(
        rename = "type",
        alias = "Type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_type: Option<String>,

    /// Protocol the service speaks.
    #[serde(default, alias = "Protocol", skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// Call method, for descriptors of single-operation services.
    #[serde(default, alias = "Method", skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// True if the service is for internal use only.
    #[serde(default, alias = "Private")]
    pub private: bool,

    /// Where to find the API contract.
    #[serde(
        default,
        alias = "APIDefinition",
        alias = "ApiDefinition",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_definition: Option<ApiDefinition>,

    /// Services this one depends on. Reference-only: each entry is expected
    /// to carry title, domain and version.
    #[serde(default, alias = "Requires", skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<Service>,

    /// Configuration values the service consumes.
    #[serde(default, alias = "Configs", skip_serializing_if = "Vec::is_empty")]
    pub configs: Vec<Config>,

    /// Command-line flags the service accepts.
    #[serde(default, alias = "Flags", skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<Flag>,

    /// Parameters used to call the service.
    #[serde(default, alias = "Parameters", skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// What a call returns.
    #[serde(default, alias = "Response", skip_serializing_if = "Option::is_none")]
    pub response: Option<Response>,

    #[serde(skip)]
    runtime: Option<RuntimeBinding>,
}

impl Service {
    /// Creates a descriptor carrying only its identity.
    pub fn new(
        title: impl Into<String>,
        domain: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            domain: domain.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Creates a new descriptor builder.
    #[must_use]
    pub fn builder(
        title: impl Into<String>,
        domain: impl Into<String>,
        version: impl Into<String>,
    ) -> ServiceBuilder {
        ServiceBuilder::new(title, domain, version)
    }

    /// Returns the identity of this service.
    #[must_use]
    pub fn id(&self) -> ServiceId {
        ServiceId {
            domain: self.domain.clone(),
            title: self.title.clone(),
            version: self.version.clone(),
        }
    }

    /// Returns the identities of all required services, in order.
    #[must_use]
    pub fn requires_ids(&self) -> Vec<ServiceId> {
        self.requires.iter().map(Self::id).collect()
    }

    /// Whether `id` is among the required services.
    #[must_use]
    pub fn depends_on(&self, id: &ServiceId) -> bool {
        self.requires
            .iter()
            .any(|r| r.domain == id.domain && r.title == id.title && r.version == id.version)
    }

    /// Returns the runtime binding, if one was applied.
    #[must_use]
    pub fn runtime(&self) -> Option<&RuntimeBinding> {
        self.runtime.as_ref()
    }

    /// Returns the serving port, if bound.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.runtime.as_ref().map(|r| r.port.as_str())
    }

    /// Returns the serving host, if bound.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.runtime.as_ref().map(|r| r.host.as_str())
    }

    /// Whether port and host have been bound.
    #[must_use]
    pub fn is_runtime_bound(&self) -> bool {
        self.runtime.is_some()
    }

    /// Binds the serving port and host.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::AlreadyBound`] if the service was bound before.
    pub fn bind_runtime(&mut self, binding: RuntimeBinding) -> ModelResult<()> {
        if let Some(existing) = &self.runtime {
            return Err(ModelError::AlreadyBound {
                address: existing.address(),
            });
        }
        self.runtime = Some(binding);
        Ok(())
    }

    /// Consuming form of [`bind_runtime`](Self::bind_runtime).
    pub fn with_runtime(mut self, binding: RuntimeBinding) -> ModelResult<Self> {
        self.bind_runtime(binding)?;
        Ok(self)
    }

    /// Validates the descriptor.
    ///
    /// Checks the identity of the root and of every `requires` entry, and the
    /// consistency of the API definition. `requires` entries are treated as
    /// leaves: their own fields beyond identity are not inspected.
    ///
    /// Duplicate keys are not an error; see
    /// [`duplicate_keys`](Self::duplicate_keys).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingField`] for an empty root identity field
    /// and [`ModelError::Validation`] for any other problem.
    pub fn validate(&self) -> ModelResult<()> {
        if let Some(field) = missing_identity(self) {
            return Err(ModelError::MissingField { field });
        }

        for (index, required) in self.requires.iter().enumerate() {
            if let Some(field) = missing_identity(required) {
                return Err(ModelError::validation(format!(
                    "requires[{index}] is missing {field}"
                )));
            }
        }

        if let Some(api) = &self.api_definition {
            api.validate()?;
        }

        Ok(())
    }

    /// Returns `(kind, key)` for every key declared more than once in the
    /// configs, flags or parameters.
    #[must_use]
    pub fn duplicate_keys(&self) -> Vec<(&'static str, &str)> {
        let configs = self.configs.duplicate_keys().into_iter().map(|k| ("config", k));
        let flags = self.flags.duplicate_keys().into_iter().map(|k| ("flag", k));
        let parameters = self
            .parameters
            .duplicate_keys()
            .into_iter()
            .map(|k| ("parameter", k));
        configs.chain(flags).chain(parameters).collect()
    }
}

fn missing_identity(service: &Service) -> Option<&'static str> {
    if service.title.is_empty() {
        Some("title")
    } else if service.domain.is_empty() {
        Some("domain")
    } else if service.version.is_empty() {
        Some("version")
    } else {
        None
    }
}

/// Builder for creating [`Service`] descriptors.
#[derive(Debug)]
pub struct ServiceBuilder {
    service: Service,
}

impl ServiceBuilder {
    /// Creates a builder for the given identity.
    pub fn new(
        title: impl Into<String>,
        domain: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            service: Service::new(title, domain, version),
        }
    }

    /// Sets the service type.
    #[must_use]
    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service.service_type = Some(service_type.into());
        self
    }

    /// Sets the protocol.
    #[must_use]
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.service.protocol = Some(protocol.into());
        self
    }

    /// Sets the call method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.service.method = Some(method.into());
        self
    }

    /// Marks the service as internal.
    #[must_use]
    pub fn private(mut self) -> Self {
        self.service.private = true;
        self
    }

    /// Sets the API definition.
    #[must_use]
    pub fn api_definition(mut self, api: ApiDefinition) -> Self {
        self.service.api_definition = Some(api);
        self
    }

    /// Adds a dependency reference.
    #[must_use]
    pub fn requires(
        mut self,
        title: impl Into<String>,
        domain: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.service
            .requires
            .push(Service::new(title, domain, version));
        self
    }

    /// Adds a config.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.service.configs.push(config);
        self
    }

    /// Adds a flag.
    #[must_use]
    pub fn flag(mut self, flag: Flag) -> Self {
        self.service.flags.push(flag);
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.service.parameters.push(parameter);
        self
    }

    /// Sets the response description.
    #[must_use]
    pub fn response(mut self, response: Response) -> Self {
        self.service.response = Some(response);
        self
    }

    /// Builds the descriptor.
    #[must_use]
    pub fn build(self) -> Service {
        self.service
    }
}
