//! Test fixtures for descriptor development and testing.
//!
//! The fixture mirrors the descriptor files shipped with the loader tests
//! (`Service.yaml`, `service.json`, `service.toml`), so a decoded file can
//! be compared against it directly.
//!
//! # Example
//!
//! ```
//! use svcdesc_core::{fixtures, KeyedSet};
//!
//! let service = fixtures::test_service();
//! assert_eq!(service.flags.required_keys(), vec!["test"]);
//! ```

use crate::{ApiDefinition, Config, Flag, Service, Vcs};

/// Creates the canonical test descriptor.
///
/// - identity `duckbunny/service@0.1`, type `test`, protocol `http`
/// - a swagger API definition stored in git
/// - two dependency references (`service2`, `service3`)
/// - one optional and one required config
/// - one required flag `test` aliased to `TESTVAR`
#[must_use]
pub fn test_service() -> Service {
    Service::builder("service", "duckbunny", "0.1")
        .service_type("test")
        .protocol("http")
        .api_definition(ApiDefinition::from_vcs(
            "swagger",
            Vcs::git("https://github.com/duckbunny/service.git", "definition.json"),
        ))
        .requires("service2", "duckbunny", "0.1")
        .requires("service3", "duckbunny", "0.1")
        .config(Config::new("testconfig1", "My first test config"))
        .config(Config::new("testconfig2", "My second test config").required())
        .flag(
            Flag::new("test", "This is a test flag.")
                .with_env("TESTVAR")
                .required(),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyedSet;

    #[test]
    fn test_fixture_shape() {
        let service = test_service();
        assert_eq!(service.id().to_string(), "duckbunny/service@0.1");
        assert_eq!(service.requires.len(), 2);
        assert_eq!(service.configs.required_keys(), vec!["testconfig2"]);
        assert_eq!(
            service.flags.get_by_key("test").unwrap().env.as_deref(),
            Some("TESTVAR")
        );
        assert!(service.flags.get_by_key("missing").is_err());
    }
}
