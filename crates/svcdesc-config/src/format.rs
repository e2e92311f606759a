//! Descriptor encodings.
//!
//! YAML is the native descriptor format. JSON and TOML decode to the same
//! [`Service`] shape.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use svcdesc_core::Service;

use crate::{DescriptorError, DescriptorResult};

/// Encoding of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// YAML, the native format.
    #[default]
    Yaml,
    /// JSON.
    Json,
    /// TOML.
    Toml,
}

impl Format {
    /// Determines the format from a file extension.
    ///
    /// `.json` and `.toml` map to their formats; anything else, including a
    /// missing extension, is treated as YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    /// Decodes a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::DecodeError`] if the bytes are malformed or
    /// do not match the descriptor shape.
    pub fn decode(self, bytes: &[u8]) -> DescriptorResult<Service> {
        match self {
            Self::Yaml => serde_yaml::from_slice(bytes).map_err(|e| DescriptorError::decode(self, e)),
            Self::Json => serde_json::from_slice(bytes).map_err(|e| DescriptorError::decode(self, e)),
            Self::Toml => {
                let content =
                    std::str::from_utf8(bytes).map_err(|e| DescriptorError::decode(self, e))?;
                toml::from_str(content).map_err(|e| DescriptorError::decode(self, e))
            }
        }
    }

    /// Encodes a descriptor. Runtime fields are never written.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::EncodeError`] if the encoder fails.
    pub fn encode(self, service: &Service) -> DescriptorResult<Vec<u8>> {
        match self {
            Self::Yaml => serde_yaml::to_string(service)
                .map(String::into_bytes)
                .map_err(|e| DescriptorError::encode(self, e)),
            Self::Json => serde_json::to_vec(service).map_err(|e| DescriptorError::encode(self, e)),
            Self::Toml => toml::to_string(service)
                .map(String::into_bytes)
                .map_err(|e| DescriptorError::encode(self, e)),
        }
    }

    /// Returns the lowercase format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(DescriptorError::unsupported_format(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path(Path::new("Service.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("Service.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("service.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("service.toml")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("Service")), Format::Yaml);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("YAML".parse::<Format>().unwrap(), Format::Yaml);
        assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert!(matches!(
            "xml".parse::<Format>(),
            Err(DescriptorError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_decode_invalid_utf8_toml() {
        let err = Format::Toml.decode(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, DescriptorError::DecodeError { format: Format::Toml, .. }));
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let err = Format::Json.decode(br#"{"title": 12}"#).unwrap_err();
        assert!(matches!(err, DescriptorError::DecodeError { format: Format::Json, .. }));
    }

    #[test]
    fn test_display() {
        assert_eq!(Format::Toml.to_string(), "toml");
    }
}
