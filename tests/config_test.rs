// tests/config_test.rs
use autochangelog::config::{load_config, Config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.output.file, "CHANGELOG.md");
    assert!(config.output.attribution);
    assert_eq!(config.limits.commits, None);
    assert_eq!(config.limits.versions, None);
    assert!(!config.groups.uncategorized);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[output]
file = "History.md"
attribution = false

[limits]
commits = 5
versions = 20

[groups]
uncategorized = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.output.file, "History.md");
    assert!(!config.output.attribution);
    assert_eq!(config.limits.commits, Some(5));
    assert_eq!(config.limits.versions, Some(20));
    assert!(config.groups.uncategorized);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[limits]\nversions = 3\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.limits.versions, Some(3));
    assert_eq!(config.limits.commits, None);
    assert_eq!(config.output.file, "CHANGELOG.md");
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"not toml at all [[[").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = load_config(Some("/nonexistent/autochangelog.toml"));
    assert!(result.is_err());
}
