//! Error handling integration tests for the ccp CLI.
//!
//! These tests verify proper error handling behaviors:
//! - Missing or directory sources are rejected before any I/O
//! - Existing destinations are not clobbered without --force
//! - Invalid chunk sizes are rejected
//! - Failures use the invalid-input exit code and a diagnostic on stderr

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_source_fails() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg(src.path().join("nonexistent.txt"))
        .arg(dst.path().join("out.txt"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!dst.path().join("out.txt").exists());
}

#[test]
fn test_directory_source_fails() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::create_dir(src.path().join("subdir")).unwrap();

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg(src.path().join("subdir"))
        .arg(dst.path().join("out.txt"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn test_existing_destination_fails_without_force() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("test.txt"), "new content").unwrap();
    fs::write(dst.path().join("test.txt"), "old content").unwrap();

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg(src.path().join("test.txt"))
        .arg(dst.path().join("test.txt"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    // The original content is untouched.
    assert_eq!(
        fs::read_to_string(dst.path().join("test.txt")).unwrap(),
        "old content"
    );
}

#[test]
fn test_zero_chunk_size_fails() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("test.txt"), "content").unwrap();

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg("--chunk-size")
        .arg("0")
        .arg(src.path().join("test.txt"))
        .arg(dst.path().join("test.txt"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("chunk size"));
}
