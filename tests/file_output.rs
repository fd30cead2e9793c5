#![cfg(feature = "enabled")]

use mammut_log::{FileOutput, LineFormat, Logger, info, warn};
use std::fs;
use tempfile::TempDir;

#[test]
fn file_output_creates_parent_directories() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("a").join("b").join("run.log");

    let logger = Logger::builder().file(&path).build();
    info!(logger: &logger, "hello");

    assert!(path.exists());
}

#[test]
fn file_output_appends_plain_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("multi.log");

    let output = FileOutput::new(&path).format(LineFormat::plain().timestamp(false).file_info(false));
    assert_eq!(output.path(), path.as_path());
    let logger = Logger::builder().output(output).build();

    info!(logger: &logger, "one");
    warn!(logger: &logger, "two");

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["INFO  one", "WARN  two"]);
    assert!(!content.contains('\x1b'));
}

#[test]
fn file_output_appends_to_existing_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("existing.log");
    fs::write(&path, "earlier\n").unwrap();

    let output = FileOutput::new(&path).format(LineFormat::plain().timestamp(false).file_info(false));
    let logger = Logger::builder().output(output).build();
    info!(logger: &logger, "later");

    assert_eq!(fs::read_to_string(&path).unwrap(), "earlier\nINFO  later\n");
}

#[test]
fn unwritable_path_does_not_fail_the_caller() {
    let tmp_dir = TempDir::new().unwrap();
    // A directory cannot be opened as a log file.
    let logger = Logger::builder().file(tmp_dir.path()).build();
    info!(logger: &logger, "dropped");
}
