//! Tests for loading configuration files.

use std::io::Write;
use strictly_boxes::{Config, DisplayConfig};

#[test]
fn test_load_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[log]
filter = "debug,strictly_boxes=trace"
file = "game.log"

[display]
show_cell_numbers = false
celebrate = false"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.log().filter(), "debug,strictly_boxes=trace");
    assert_eq!(config.log().file(), "game.log");
    assert_eq!(
        config.display(),
        &DisplayConfig::default()
            .with_show_cell_numbers(false)
            .with_celebrate(false)
    );
}

#[test]
fn test_missing_optional_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(dir.path().join("absent.toml"), false).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_missing_required_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.toml"), true).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display]\ncelebrate = \"sometimes\"").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
