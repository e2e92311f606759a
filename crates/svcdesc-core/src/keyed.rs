//! Queries over ordered collections of keyed settings.
//!
//! [`Config`](crate::Config), [`Flag`](crate::Flag) and
//! [`Parameter`](crate::Parameter) all carry a key and a required marker.
//! [`Keyed`] captures that shape and [`KeyedSet`] implements the required
//! and lookup queries once for every slice of such elements.
//!
//! # Example
//!
//! ```
//! use svcdesc_core::{Flag, KeyedSet};
//!
//! let flags = vec![
//!     Flag::new("verbose", "Verbose output"),
//!     Flag::new("token", "API token").required(),
//! ];
//!
//! assert_eq!(flags.required_keys(), vec!["token"]);
//! assert_eq!(flags.get_by_key("verbose").unwrap().description, "Verbose output");
//! assert!(flags.get_by_key("missing").is_err());
//! ```

use std::collections::HashSet;

use crate::{ModelError, ModelResult};

/// An element identified by a key that may be marked as required.
pub trait Keyed {
    /// Human-readable element kind used in error messages.
    const KIND: &'static str;

    /// The element key.
    fn key(&self) -> &str;

    /// Whether the element is required.
    fn is_required(&self) -> bool;
}

/// Required-set and lookup queries over an ordered sequence of [`Keyed`]
/// elements.
///
/// Keys are expected to be unique. When they are not, the first occurrence
/// is authoritative for [`get_by_key`](KeyedSet::get_by_key).
pub trait KeyedSet<T: Keyed> {
    /// Returns the key of every required element, in original order.
    fn required_keys(&self) -> Vec<&str>;

    /// Returns every required element, in original order.
    fn required(&self) -> Vec<&T>;

    /// Returns the first element whose key equals `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::KeyNotFound`] if no element matches.
    fn get_by_key(&self, key: &str) -> ModelResult<&T>;

    /// Returns keys that occur more than once, each reported once, in order
    /// of their second occurrence.
    fn duplicate_keys(&self) -> Vec<&str>;
}

impl<T: Keyed> KeyedSet<T> for [T] {
    fn required_keys(&self) -> Vec<&str> {
        self.iter()
            .filter(|item| item.is_required())
            .map(Keyed::key)
            .collect()
    }

    fn required(&self) -> Vec<&T> {
        self.iter().filter(|item| item.is_required()).collect()
    }

    fn get_by_key(&self, key: &str) -> ModelResult<&T> {
        self.iter()
            .find(|item| item.key() == key)
            .ok_or_else(|| ModelError::key_not_found(T::KIND, key))
    }

    fn duplicate_keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for item in self {
            let key = item.key();
            if !seen.insert(key) && reported.insert(key) {
                duplicates.push(key);
            }
        }
        duplicates
    }
}
