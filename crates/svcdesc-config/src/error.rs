//! Descriptor loading error types.

use std::path::PathBuf;

use svcdesc_core::ModelError;
use thiserror::Error;

use crate::Format;

/// Result type alias using [`DescriptorError`].
pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// Errors that can occur while loading, encoding or binding a descriptor.
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// Descriptor file not found.
    #[error("descriptor file not found: {path}")]
    NotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Descriptor file exists but could not be read.
    #[error("failed to read descriptor file: {path}")]
    ReadError {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Bytes are not a valid descriptor in the expected format.
    #[error("failed to decode {format} descriptor: {message}")]
    DecodeError {
        /// Format that was being decoded.
        format: Format,
        /// Decoder message.
        message: String,
    },

    /// Descriptor could not be serialized.
    #[error("failed to encode {format} descriptor: {message}")]
    EncodeError {
        /// Format that was being encoded.
        format: Format,
        /// Encoder message.
        message: String,
    },

    /// Format name is not one of yaml, json or toml.
    #[error("unsupported descriptor format: {format}")]
    UnsupportedFormat {
        /// The rejected format name.
        format: String,
    },

    /// Runtime resolution finished without a port.
    #[error("no port set")]
    NoPort,

    /// Runtime resolution finished without a host.
    #[error("no host set")]
    NoHost,

    /// The descriptor model rejected the value.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl DescriptorError {
    /// Create a new not found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a new read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a new decode error.
    pub fn decode(format: Format, message: impl ToString) -> Self {
        Self::DecodeError {
            format,
            message: message.to_string(),
        }
    }

    /// Create a new encode error.
    pub fn encode(format: Format, message: impl ToString) -> Self {
        Self::EncodeError {
            format,
            message: message.to_string(),
        }
    }

    /// Create a new unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }
}
