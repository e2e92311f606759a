//! Error types for the descriptor model.
//!
//! Query operations over keyed collections return [`ModelError::KeyNotFound`]
//! instead of a zero value, so a missing key can never be mistaken for a
//! legitimately empty element.

use thiserror::Error;

/// Result type alias using [`ModelError`].
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by the descriptor model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Lookup by key found no matching element.
    #[error("{kind} {key} not found")]
    KeyNotFound {
        /// Element kind that was searched ("config", "flag", "parameter").
        kind: &'static str,
        /// The key that was requested.
        key: String,
    },

    /// A mandatory identity field is empty.
    #[error("missing required descriptor field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The descriptor is structurally inconsistent.
    #[error("descriptor validation failed: {0}")]
    Validation(String),

    /// Runtime fields were bound a second time.
    #[error("service runtime is already bound to {address}")]
    AlreadyBound {
        /// The existing `host:port` binding.
        address: String,
    },
}

impl ModelError {
    /// Create a new key not found error.
    pub fn key_not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::KeyNotFound {
            kind,
            key: key.into(),
        }
    }

    /// Create a new validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns `true` if this is a [`ModelError::KeyNotFound`].
    #[must_use]
    pub const fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }
}
