// tests/config_test.rs
use semrel::config::{load_config, Config, ParserKind};
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.version.tag_format, "v{version}");
    assert_eq!(config.version.prerelease_token, "rc");
    assert!(config.version.major_on_zero);
    assert!(config.version.allow_zero_version);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[version]
tag_format = "release-{version}"
prerelease_token = "beta"
allow_zero_version = false

[parser]
kind = "tag"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.version.tag_format, "release-{version}");
    assert_eq!(config.version.prerelease_token, "beta");
    assert!(!config.version.allow_zero_version);
    assert_eq!(config.parser.kind, ParserKind::Tag);
}

#[test]
fn test_load_missing_file_is_an_error() {
    assert!(load_config(Some("/nonexistent/semrel.toml")).is_err());
}

#[test]
fn test_load_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"not valid toml [[[").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
fn test_parser_keyword_overrides() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[parser.conventional]
minor_types = ["feat", "enhancement"]
patch_types = ["fix", "perf", "refactor"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(config
        .parser
        .conventional
        .minor_types
        .contains(&"enhancement".to_string()));
    assert!(config
        .parser
        .conventional
        .patch_types
        .contains(&"refactor".to_string()));
    // Untouched sections keep their defaults.
    assert!(config
        .parser
        .conventional
        .breaking_indicators
        .contains(&"BREAKING CHANGE:".to_string()));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("semrel.toml"),
        "[version]\ntag_format = \"cwd-{version}\"\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.unwrap().version.tag_format, "cwd-{version}");
}
