//! Tests for TOML configuration loading.

use mammut_log::{Config, Error, Level, Logger, Stream};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.parse_level(), Level::Debug);
    assert!(config.terminal.enabled);
    assert!(config.terminal.colors);
    assert!(config.terminal.timestamp);
    assert!(config.terminal.file_info);
    assert_eq!(config.parse_stream(), Stream::Stdout);
    assert!(!config.file.enabled);
    assert!(config.file.path.ends_with("mammut.log"));
}

#[test]
fn sections_override_defaults() {
    let config = Config::parse(
        r#"
[general]
level = "warn"

[terminal]
stream = "stderr"
colors = false
file_info = false

[file]
enabled = true
path = "/tmp/app.log"
timestamp = false
"#,
    )
    .unwrap();

    assert_eq!(config.parse_level(), Level::Warn);
    assert_eq!(config.parse_stream(), Stream::Stderr);
    assert!(!config.terminal.colors);
    assert!(config.terminal.timestamp);
    assert!(!config.terminal.file_info);
    assert!(config.file.enabled);
    assert_eq!(config.file.path, "/tmp/app.log");
    assert!(!config.file.timestamp);
}

#[test]
fn unknown_level_falls_back_to_debug() {
    let config = Config::parse("[general]\nlevel = \"shouty\"\n").unwrap();
    assert_eq!(config.parse_level(), Level::Debug);
    assert!(matches!(
        config.try_level(),
        Err(Error::InvalidLevel(level)) if level == "shouty"
    ));
}

#[test]
fn unknown_stream_falls_back_to_stdout() {
    let config = Config::parse("[terminal]\nstream = \"printer\"\n").unwrap();
    assert_eq!(config.parse_stream(), Stream::Stdout);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Config::parse("[general\nlevel = ").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.parse_level(), Level::Debug);
}

#[test]
fn load_from_reads_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("config.toml");
    fs::write(&path, "[general]\nlevel = \"trace\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Trace);
}

#[test]
fn default_config_path_is_under_project_dir() {
    match Config::get_config_path() {
        Ok(path) => {
            assert_eq!(path.file_name().unwrap(), "config.toml");
            let project_dir = path.parent().unwrap().to_string_lossy().to_lowercase();
            assert!(project_dir.contains("mammut-log"), "{}", path.display());
        }
        Err(err) => assert!(matches!(err, Error::ConfigDirNotFound)),
    }
}

#[test]
fn logger_from_config_wires_outputs() {
    let tmp_dir = TempDir::new().unwrap();
    let log_path = tmp_dir.path().join("out").join("app.log");
    let config = Config::parse(&format!(
        r#"
[general]
level = "info"

[terminal]
enabled = false

[file]
enabled = true
path = "{}"
"#,
        log_path.display()
    ))
    .unwrap();

    let logger = Logger::from_config(&config);
    assert_eq!(logger.threshold(), Level::Info);
    assert_eq!(logger.output_count(), 1);
}

#[cfg(all(feature = "enabled", feature = "file-info"))]
#[test]
fn file_output_from_config_honors_columns() {
    let tmp_dir = TempDir::new().unwrap();
    let log_path = tmp_dir.path().join("app.log");
    let config = Config::parse(&format!(
        r#"
[terminal]
enabled = false

[file]
enabled = true
path = "{}"
timestamp = false
"#,
        log_path.display()
    ))
    .unwrap();

    let logger = Logger::from_config(&config);
    let line = line!() + 1;
    mammut_log::info!(logger: &logger, "configured");

    let content = fs::read_to_string(&log_path).unwrap();
    assert_eq!(
        content,
        format!("INFO  config.rs:{line} file_output_from_config_honors_columns() configured\n")
    );
}

#[test]
fn both_outputs_disabled_builds_silent_logger() {
    let config = Config::parse("[terminal]\nenabled = false\n").unwrap();
    assert_eq!(Logger::from_config(&config).output_count(), 0);
}
