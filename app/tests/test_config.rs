//! FILENAME: tests/test_config.rs
//! Integration tests for command-line parsing into AppConfig.

use std::path::PathBuf;

use app_lib::{AppConfig, OutputFormat};
use clap::error::ErrorKind;

fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
    AppConfig::try_from_args(std::iter::once("pinaculo").chain(args.iter().copied()))
}

// ============================================================================
// ACCEPTED ARGUMENTS
// ============================================================================

#[test]
fn test_name_and_date() {
    let config = parse(&["--name", "Carlos Carpio", "--date", "06/05/1982"]).unwrap();
    assert_eq!(config.name.as_deref(), Some("Carlos Carpio"));
    assert_eq!(config.date.as_deref(), Some("06/05/1982"));
    assert!(!config.preview);
    assert_eq!(config.log_file, None);
}

#[test]
fn test_preview_alone() {
    let config = parse(&["--preview"]).unwrap();
    assert!(config.preview);
    assert_eq!(config.name, None);
}

#[test]
fn test_explicit_format_and_log_file() {
    let config = parse(&[
        "--preview",
        "--format",
        "json",
        "--log-file",
        "/tmp/pinaculo.log",
    ])
    .unwrap();
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/pinaculo.log")));
}

// ============================================================================
// REJECTED ARGUMENTS
// ============================================================================

#[test]
fn test_name_without_date() {
    let err = parse(&["--name", "Ana"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_nothing_given() {
    let err = parse(&[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_preview_conflicts_with_person() {
    let err = parse(&["--preview", "--name", "Ana"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn test_unknown_format() {
    let err = parse(&["--preview", "--format", "xml"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}
