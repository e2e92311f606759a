//! Integration tests for runtime port/host resolution.

use std::path::PathBuf;

use svcdesc_config::{resolve_runtime, resolve_runtime_with, DescriptorError, RuntimeOptions};
use svcdesc_core::fixtures;

fn service_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("Service.yaml")
}

#[test]
fn test_missing_file() {
    let err = resolve_runtime_with("fakefile.yaml", "80", "localhost", "").unwrap_err();
    assert!(matches!(err, DescriptorError::NotFound { .. }));
}

#[test]
fn test_no_port_regardless_of_host() {
    for (host_flag, host_env) in [("", ""), ("localhost", ""), ("", "env-host")] {
        let err = resolve_runtime_with(service_file(), "", host_flag, host_env).unwrap_err();
        assert!(matches!(err, DescriptorError::NoPort));
    }
}

#[test]
fn test_no_host() {
    let err = resolve_runtime_with(service_file(), "80", "", "").unwrap_err();
    assert!(matches!(err, DescriptorError::NoHost));
}

#[test]
fn test_host_flag_wins_over_env() {
    for host_env in ["", "env-host"] {
        let service = resolve_runtime_with(service_file(), "80", "localhost", host_env).unwrap();
        assert_eq!(service.port(), Some("80"));
        assert_eq!(service.host(), Some("localhost"));
    }
}

#[test]
fn test_env_used_when_flag_empty() {
    let service = resolve_runtime_with(service_file(), "80", "", "env-host").unwrap();
    assert_eq!(service.host(), Some("env-host"));
}

#[test]
fn test_resolved_descriptor_matches_fixture() {
    let options = RuntimeOptions::from_env_with(|_| Some("localhost".to_string()))
        .with_service_file(service_file())
        .with_service_port("80");

    let service = resolve_runtime(&options).unwrap();
    assert_eq!(service.runtime().unwrap().address(), "localhost:80");

    let expected = fixtures::test_service()
        .with_runtime(svcdesc_core::RuntimeBinding::new("80", "localhost"))
        .unwrap();
    assert_eq!(service, expected);
}

#[test]
fn test_resolution_stages_in_order() {
    let options = RuntimeOptions::new().with_service_file("fakefile.yaml");
    assert!(matches!(options.resolve(), Err(DescriptorError::NotFound { .. })));

    let options = options.with_service_file(service_file());
    assert!(matches!(options.resolve(), Err(DescriptorError::NoPort)));

    let options = options.with_service_port("80");
    assert!(matches!(options.resolve(), Err(DescriptorError::NoHost)));

    let options = options.with_service_host("localhost");
    let service = options.resolve().unwrap();
    assert_eq!(service.host(), Some("localhost"));
}
