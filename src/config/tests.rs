//! Tests for config functionality.

use crate::cli::Cli;
use crate::config::{OutputMedium, OutputShape, RunConfig, DEFAULT_FONT_STACK};
use clap::Parser;
use std::io::Write;

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["celldiff", "-i", "in.csv", "-o", "out.csv"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_default_config() {
    let config = RunConfig::default();

    assert_eq!(config.shape, OutputShape::Full);
    assert_eq!(config.medium, OutputMedium::Csv);
    assert_eq!(config.line_limit, 0);
    assert_eq!(config.headers, None);
    assert_eq!(config.font_family, DEFAULT_FONT_STACK);
    assert_eq!(config.diff_timeout_ms, 1000);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = RunConfig::from_yaml("").unwrap();
    assert_eq!(config, RunConfig::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
shape: list
medium: html
line_limit: 25
headers: [ID, Item, Status, Memo]
font_family: "Noto Sans, sans-serif"
diff_timeout_ms: 0
"#;
    let config = RunConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.shape, OutputShape::List);
    assert_eq!(config.medium, OutputMedium::Html);
    assert_eq!(config.line_limit, 25);
    assert_eq!(
        config.header_names(),
        Some(&["ID", "Item", "Status", "Memo"].map(String::from)[..])
    );
    assert_eq!(config.font_family, "Noto Sans, sans-serif");
    assert_eq!(config.diff_timeout_ms, 0);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let config = RunConfig::from_yaml("future_option: true\nline_limit: 3\n").unwrap();
    assert_eq!(config.line_limit, 3);
}

#[test]
fn test_invalid_enum_value_is_user_error() {
    let err = RunConfig::from_yaml("medium: pdf\n").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_empty_header_list_means_no_mapping() {
    let config = RunConfig::from_yaml("headers: []\n").unwrap();
    assert_eq!(config.headers, None);
}

#[test]
fn test_blank_header_name_is_rejected() {
    let err = RunConfig::from_yaml("headers: [ID, '  ', Memo]\n").unwrap_err();
    assert!(err.to_string().contains("header name 2 is empty"));
}

#[test]
fn test_yaml_round_trip() {
    let config = RunConfig {
        shape: OutputShape::List,
        headers: Some(vec!["A".to_string(), "B".to_string()]),
        ..RunConfig::default()
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(RunConfig::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_flags_override_file_values() {
    let mut config = RunConfig::from_yaml("line_limit: 10\nheaders: [A, B]\n").unwrap();
    config.apply_overrides(&cli(&["--html", "--light", "-n", "0", "--header", "X,Y,Z"]));

    assert_eq!(config.medium, OutputMedium::Html);
    assert_eq!(config.shape, OutputShape::List);
    assert_eq!(config.line_limit, 0);
    assert_eq!(config.headers, Some(vec!["X".into(), "Y".into(), "Z".into()]));
}

#[test]
fn test_absent_flags_keep_file_values() {
    let yaml = "shape: list\nmedium: html\nline_limit: 7\nfont_family: serif\n";
    let mut config = RunConfig::from_yaml(yaml).unwrap();
    config.apply_overrides(&cli(&[]));

    assert_eq!(config.shape, OutputShape::List);
    assert_eq!(config.medium, OutputMedium::Html);
    assert_eq!(config.line_limit, 7);
    assert_eq!(config.font_family, "serif");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "medium: html").unwrap();
    let config = RunConfig::load(file.path()).unwrap();
    assert_eq!(config.medium, OutputMedium::Html);
}

#[test]
fn test_load_missing_file_is_user_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RunConfig::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
