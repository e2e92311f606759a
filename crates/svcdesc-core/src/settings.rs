//! Keyed settings a service declares: configs, flags and call parameters.
//!
//! Every type accepts both the PascalCase keys used in YAML descriptors
//! (`Key`, `Required`) and the camelCase keys used in JSON (`key`,
//! `required`), and always serializes camelCase.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Keyed;

/// A configuration value the service consumes from its environment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Name of the variable.
    #[serde(alias = "Key")]
    pub key: String,

    /// Whether the service refuses to start without it.
    #[serde(default, alias = "Required")]
    pub required: bool,

    /// Human-readable description of the value.
    #[serde(default, alias = "Description")]
    pub description: String,
}

impl Config {
    /// Creates an optional config.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            required: false,
            description: description.into(),
        }
    }

    /// Marks the config as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl Keyed for Config {
    const KIND: &'static str = "config";

    fn key(&self) -> &str {
        &self.key
    }

    fn is_required(&self) -> bool {
        self.required
    }
}

/// A command-line flag the service accepts.
///
/// `env` names an environment variable that can be set in lieu of the flag.
/// An explicit flag value always overrides the environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flag {
    /// Flag designation on the command line.
    #[serde(alias = "Key")]
    pub key: String,

    /// Environment variable aliasing the flag.
    #[serde(default, alias = "Env", skip_serializing_if = "Option::is_none")]
    pub env: Option<String>,

    /// Human-readable description of the flag.
    #[serde(default, alias = "Description")]
    pub description: String,

    /// Whether the flag must be supplied.
    #[serde(default, alias = "Required")]
    pub required: bool,
}

impl Flag {
    /// Creates an optional flag without an environment alias.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            env: None,
            description: description.into(),
            required: false,
        }
    }

    /// Sets the environment variable aliasing this flag.
    #[must_use]
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Marks the flag as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Picks the effective value of this flag: the explicit flag value if
    /// one was given, otherwise the value of the aliased environment
    /// variable looked up through `getenv`.
    pub fn resolve_with<F>(&self, explicit: Option<&str>, getenv: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        match explicit {
            Some(value) => Some(value.to_string()),
            None => self.env.as_deref().and_then(getenv),
        }
    }
}

impl Keyed for Flag {
    const KIND: &'static str = "flag";

    fn key(&self) -> &str {
        &self.key
    }

    fn is_required(&self) -> bool {
        self.required
    }
}

/// Where a call parameter travels in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// URL query string.
    #[serde(alias = "Query")]
    Query,
    /// Templated path segment.
    #[serde(alias = "Path")]
    Path,
    /// Request header.
    #[serde(alias = "Header")]
    Header,
    /// Request body.
    #[serde(alias = "Body")]
    Body,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Query => "query",
            Self::Path => "path",
            Self::Header => "header",
            Self::Body => "body",
        };
        f.write_str(name)
    }
}

/// A parameter used to call the service.
///
/// The type and location are classification metadata only; they are never
/// checked against actual requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name.
    #[serde(alias = "Key")]
    pub key: String,

    /// Whether callers must supply it.
    #[serde(default, alias = "Required")]
    pub required: bool,

    /// Human-readable description.
    #[serde(default, alias = "Description")]
    pub description: String,

    /// Declared value type (e.g. "string", "integer").
    #[serde(
        rename = "type",
        alias = "Type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub param_type: Option<String>,

    /// Where the parameter is carried.
    #[serde(default, alias = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<ParameterLocation>,
}

impl Parameter {
    /// Creates an optional, untyped parameter.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Marks the parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the declared value type.
    #[must_use]
    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = Some(param_type.into());
        self
    }

    /// Sets where the parameter is carried.
    #[must_use]
    pub fn at(mut self, location: ParameterLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl Keyed for Parameter {
    const KIND: &'static str = "parameter";

    fn key(&self) -> &str {
        &self.key
    }

    fn is_required(&self) -> bool {
        self.required
    }
}

/// What a call to the service returns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Content type or schema name of the response body.
    #[serde(
        rename = "type",
        alias = "Type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub response_type: Option<String>,

    /// Human-readable description.
    #[serde(default, alias = "Description")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_explicit_value_wins_over_env() {
        let flag = Flag::new("test", "").with_env("TESTVAR");
        let getenv = |name: &str| (name == "TESTVAR").then(|| "from-env".to_string());

        assert_eq!(
            flag.resolve_with(Some("from-flag"), getenv),
            Some("from-flag".to_string())
        );
        assert_eq!(flag.resolve_with(None, getenv), Some("from-env".to_string()));
    }

    #[test]
    fn test_flag_without_env_alias() {
        let flag = Flag::new("test", "");
        assert_eq!(flag.resolve_with(None, |_| Some("x".to_string())), None);
    }

    #[test]
    fn test_config_accepts_both_casings() {
        let pascal: Config =
            serde_json::from_str(r#"{"Key": "a", "Required": true, "Description": "d"}"#).unwrap();
        let camel: Config =
            serde_json::from_str(r#"{"key": "a", "required": true, "description": "d"}"#).unwrap();
        assert_eq!(pascal, camel);
        assert_eq!(pascal, Config::new("a", "d").required());
    }

    #[test]
    fn test_config_key_is_mandatory() {
        let result: Result<Config, _> = serde_json::from_str(r#"{"required": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parameter_metadata() {
        let param: Parameter = serde_json::from_str(
            r#"{"Key": "id", "Required": true, "Type": "integer", "Location": "path"}"#,
        )
        .unwrap();
        assert_eq!(param.param_type.as_deref(), Some("integer"));
        assert_eq!(param.location, Some(ParameterLocation::Path));
        assert_eq!(param.location.unwrap().to_string(), "path");

        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["type"], "integer");
        assert_eq!(json["location"], "path");
    }

    #[test]
    fn test_flag_omits_absent_env() {
        let json = serde_json::to_value(Flag::new("v", "verbose")).unwrap();
        assert!(json.get("env").is_none());
        assert_eq!(json["required"], false);
    }
}
