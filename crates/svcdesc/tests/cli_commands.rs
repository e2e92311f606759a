//! Integration tests running `svcdesc` commands against descriptor files.

use std::path::{Path, PathBuf};

use clap::Parser;
use svcdesc::cli::{run, Cli};
use svcdesc::config::DescriptorError;
use svcdesc::core::ModelError;
use tempfile::TempDir;

const DESCRIPTOR: &str = "
Title: service
Domain: duckbunny
Version: '0.1'
Protocol: http
Configs:
  - Key: testconfig1
    Description: My first test config
  - Key: testconfig2
    Description: My second test config
    Required: true
Flags:
  - Key: test
    Env: TESTVAR
    Description: This is a test flag.
    Required: true
  - Key: test
    Description: Shadowed duplicate.
Parameters:
  - Key: id
    Required: true
    Location: path
";

fn write_descriptor(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("Service.yaml");
    std::fs::write(&path, DESCRIPTOR).unwrap();
    path
}

fn run_cli(file: &Path, args: &[&str]) -> anyhow::Result<String> {
    let mut argv = vec!["svcdesc", "--service-file", file.to_str().unwrap()];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();

    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_required_flags() {
    let dir = TempDir::new().unwrap();
    let file = write_descriptor(&dir);
    assert_eq!(run_cli(&file, &["required", "flags"]).unwrap(), "test\n");
    assert_eq!(run_cli(&file, &["required", "configs"]).unwrap(), "testconfig2\n");
    assert_eq!(run_cli(&file, &["required", "parameters"]).unwrap(), "id\n");
}

#[test]
fn test_get_returns_first_occurrence() {
    let dir = TempDir::new().unwrap();
    let file = write_descriptor(&dir);
    let output = run_cli(&file, &["get", "flags", "test"]).unwrap();
    let flag: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(flag["description"], "This is a test flag.");
    assert_eq!(flag["env"], "TESTVAR");
}

#[test]
fn test_get_missing_key() {
    let dir = TempDir::new().unwrap();
    let file = write_descriptor(&dir);
    let err = run_cli(&file, &["get", "configs", "missing"]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ModelError>(),
        Some(&ModelError::key_not_found("config", "missing"))
    );
}

#[test]
fn test_validate_reports_duplicates() {
    let dir = TempDir::new().unwrap();
    let file = write_descriptor(&dir);
    let output = run_cli(&file, &["validate"]).unwrap();
    assert_eq!(
        output,
        "warning: duplicate flag key test\nduckbunny/service@0.1 is valid\n"
    );
}

#[test]
fn test_show_json_excludes_runtime() {
    let dir = TempDir::new().unwrap();
    let file = write_descriptor(&dir);
    let output = run_cli(&file, &["show", "--service-port", "80"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["title"], "service");
    assert!(json.get("port").is_none());
}

#[test]
fn test_show_yaml_round_trips() {
    let dir = TempDir::new().unwrap();
    let file = write_descriptor(&dir);
    let output = run_cli(&file, &["show", "--format", "yaml"]).unwrap();
    let reloaded = svcdesc::config::load_from_yaml(output.as_bytes()).unwrap();
    let original = svcdesc::config::load_from_file(&file).unwrap();
    assert_eq!(reloaded, original);
}

#[test]
fn test_bind() {
    let dir = TempDir::new().unwrap();
    let file = write_descriptor(&dir);
    let output = run_cli(
        &file,
        &["bind", "--service-port", "80", "--service-host", "localhost"],
    )
    .unwrap();
    assert_eq!(output, "duckbunny/service@0.1 localhost:80\n");
}

#[test]
fn test_bind_without_port() {
    let dir = TempDir::new().unwrap();
    let file = write_descriptor(&dir);
    let err = run_cli(&file, &["bind", "--service-host", "localhost"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DescriptorError>(),
        Some(DescriptorError::NoPort)
    ));
}

#[test]
fn test_bind_with_empty_host() {
    let dir = TempDir::new().unwrap();
    let file = write_descriptor(&dir);
    let err = run_cli(&file, &["bind", "--service-port", "80", "--service-host", ""]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DescriptorError>(),
        Some(DescriptorError::NoHost)
    ));
}

#[test]
fn test_missing_descriptor_file() {
    let dir = TempDir::new().unwrap();
    let err = run_cli(&dir.path().join("Service.yaml"), &["validate"]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DescriptorError>(),
        Some(DescriptorError::NotFound { .. })
    ));
}
