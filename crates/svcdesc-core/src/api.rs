//! Where and how to fetch a service's full API contract.

use serde::{Deserialize, Serialize};

use crate::{ModelError, ModelResult};

/// How an API definition is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    /// Fetched from a URL on the web.
    #[serde(alias = "URL", alias = "Url")]
    Url,
    /// Fetched from a file inside a VCS repository.
    #[serde(alias = "VCS", alias = "Vcs")]
    Vcs,
}

/// Describes the API contract of a service.
///
/// # Example
///
/// ```
/// use svcdesc_core::{ApiDefinition, Vcs};
///
/// let api = ApiDefinition::from_vcs(
///     "swagger",
///     Vcs::git("https://github.com/duckbunny/service.git", "definition.json"),
/// );
/// assert!(api.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDefinition {
    /// Definition flavour (swagger, apiblueprint, ...).
    #[serde(
        rename = "type",
        alias = "Type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub api_type: Option<String>,

    /// How to find the definition.
    #[serde(
        default,
        alias = "LocationType",
        skip_serializing_if = "Option::is_none"
    )]
    pub location_type: Option<LocationType>,

    /// VCS coordinates, when `location_type` is `vcs`.
    #[serde(default, alias = "VCS", skip_serializing_if = "Option::is_none")]
    pub vcs: Option<Vcs>,

    /// Web location, when `location_type` is `url`.
    #[serde(default, alias = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ApiDefinition {
    /// Creates a definition served from a URL.
    pub fn from_url(api_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            api_type: Some(api_type.into()),
            location_type: Some(LocationType::Url),
            vcs: None,
            url: Some(url.into()),
        }
    }

    /// Creates a definition stored in a VCS repository.
    pub fn from_vcs(api_type: impl Into<String>, vcs: Vcs) -> Self {
        Self {
            api_type: Some(api_type.into()),
            location_type: Some(LocationType::Vcs),
            vcs: Some(vcs),
            url: None,
        }
    }

    /// Checks that the declared location type carries its location.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Validation`] if `location_type` is `vcs` without
    /// a VCS record, or `url` without a URL.
    pub fn validate(&self) -> ModelResult<()> {
        match self.location_type {
            Some(LocationType::Vcs) if self.vcs.is_none() => Err(ModelError::validation(
                "apiDefinition.locationType is vcs but no vcs record is set",
            )),
            Some(LocationType::Url) if self.url.as_deref().map_or(true, str::is_empty) => {
                Err(ModelError::validation(
                    "apiDefinition.locationType is url but no url is set",
                ))
            }
            _ => Ok(()),
        }
    }
}

/// Location of an API definition inside a VCS repository.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vcs {
    /// Repository endpoint.
    #[serde(default, alias = "Location")]
    pub location: String,

    /// VCS flavour (git, hg).
    #[serde(rename = "type", alias = "Type", default)]
    pub vcs_type: String,

    /// Path of the definition relative to the repository root.
    #[serde(default, alias = "File")]
    pub file: String,
}

impl Vcs {
    /// Creates a git location.
    pub fn git(location: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            vcs_type: "git".to_string(),
            file: file.into(),
        }
    }
}
