//! Descriptor loading and serialization.
//!
//! This module provides the [`DescriptorLoader`] and the free functions
//! built on its default configuration.

use std::fs;
use std::path::Path;

use svcdesc_core::Service;
use tracing::{debug, warn};

use crate::{DescriptorError, DescriptorResult, Format};

/// Loads service descriptors from files, strings or bytes.
///
/// Every load decodes the bytes, warns about duplicate keys in the keyed
/// collections, and, in strict mode, validates the descriptor.
///
/// # Example
///
/// ```no_run
/// use svcdesc_config::DescriptorLoader;
///
/// # fn main() -> Result<(), svcdesc_config::DescriptorError> {
/// let service = DescriptorLoader::new()
///     .strict()
///     .load_file("Service.yaml")?;
///
/// println!("loaded {}", service.id());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DescriptorLoader {
    strict: bool,
}

impl DescriptorLoader {
    /// Create a new, non-strict loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every loaded descriptor.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Load a descriptor from a file.
    ///
    /// The format is determined by the file extension (see
    /// [`Format::from_path`]).
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError` if:
    /// - The file does not exist
    /// - The file cannot be read
    /// - The file is not a valid descriptor
    /// - Strict validation fails
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> DescriptorResult<Service> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DescriptorError::not_found(path));
        }

        let content = fs::read(path).map_err(|e| DescriptorError::read_error(path, e))?;
        let format = Format::from_path(path);
        debug!(path = %path.display(), %format, "loading service descriptor");

        self.load_bytes(&content, format)
    }

    /// Load a descriptor from a string.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError` if decoding or strict validation fails.
    ///
    /// # Example
    ///
    /// ```
    /// use svcdesc_config::{DescriptorLoader, Format};
    ///
    /// let yaml = "
    /// Title: service
    /// Domain: duckbunny
    /// Version: '0.1'
    /// ";
    ///
    /// let service = DescriptorLoader::new()
    ///     .load_str(yaml, Format::Yaml)
    ///     .unwrap();
    ///
    /// assert_eq!(service.title, "service");
    /// ```
    pub fn load_str(&self, content: &str, format: Format) -> DescriptorResult<Service> {
        self.load_bytes(content.as_bytes(), format)
    }

    /// Load a descriptor from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError` if decoding or strict validation fails.
    pub fn load_bytes(&self, bytes: &[u8], format: Format) -> DescriptorResult<Service> {
        let service = format.decode(bytes)?;

        for (kind, key) in service.duplicate_keys() {
            warn!(
                service = %service.id(),
                kind,
                key,
                "duplicate key in descriptor, first occurrence wins"
            );
        }

        if self.strict {
            service.validate()?;
        }

        debug!(
            service = %service.id(),
            requires = service.requires.len(),
            configs = service.configs.len(),
            flags = service.flags.len(),
            parameters = service.parameters.len(),
            "service descriptor loaded"
        );

        Ok(service)
    }
}

/// Load a descriptor from a file.
///
/// # Errors
///
/// Returns [`DescriptorError::NotFound`] if the file is absent,
/// [`DescriptorError::ReadError`] if it cannot be read, and
/// [`DescriptorError::DecodeError`] if it is not a valid descriptor.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> DescriptorResult<Service> {
    DescriptorLoader::new().load_file(path)
}

/// Load a descriptor from JSON bytes.
///
/// # Errors
///
/// Returns [`DescriptorError::DecodeError`] if the bytes are not a valid
/// JSON descriptor.
pub fn load_from_json(bytes: &[u8]) -> DescriptorResult<Service> {
    DescriptorLoader::new().load_bytes(bytes, Format::Json)
}

/// Load a descriptor from YAML bytes.
///
/// # Errors
///
/// Returns [`DescriptorError::DecodeError`] if the bytes are not a valid
/// YAML descriptor.
pub fn load_from_yaml(bytes: &[u8]) -> DescriptorResult<Service> {
    DescriptorLoader::new().load_bytes(bytes, Format::Yaml)
}

/// Load a descriptor from a string in the given format.
///
/// # Errors
///
/// Returns [`DescriptorError::DecodeError`] if decoding fails.
pub fn load_from_str(content: &str, format: Format) -> DescriptorResult<Service> {
    DescriptorLoader::new().load_str(content, format)
}

/// Serialize a descriptor to compact JSON.
///
/// Port and host are deployment details and are never written.
///
/// # Errors
///
/// Returns [`DescriptorError::EncodeError`] if serialization fails.
pub fn to_json(service: &Service) -> DescriptorResult<Vec<u8>> {
    Format::Json.encode(service)
}

/// Serialize a descriptor to indented JSON.
///
/// # Errors
///
/// Returns [`DescriptorError::EncodeError`] if serialization fails.
pub fn to_json_pretty(service: &Service) -> DescriptorResult<String> {
    serde_json::to_string_pretty(service).map_err(|e| DescriptorError::encode(Format::Json, e))
}

/// Serialize a descriptor to YAML.
///
/// # Errors
///
/// Returns [`DescriptorError::EncodeError`] if serialization fails.
pub fn to_yaml(service: &Service) -> DescriptorResult<String> {
    serde_yaml::to_string(service).map_err(|e| DescriptorError::encode(Format::Yaml, e))
}
