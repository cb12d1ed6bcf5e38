//! Basic functionality integration tests for the ccp CLI.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn test_basic_file_copy() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("test.txt"), "hello world").unwrap();

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg(src.path().join("test.txt"))
        .arg(dst.path().join("test.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Copied"));

    assert_eq!(
        fs::read_to_string(dst.path().join("test.txt")).unwrap(),
        "hello world"
    );
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(512)]
#[case(8192)]
fn test_copy_is_byte_identical_across_chunk_sizes(#[case] chunk_size: usize) {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    let data = patterned(4096);
    fs::write(src.path().join("data.bin"), &data).unwrap();

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg("--chunk-size")
        .arg(chunk_size.to_string())
        .arg("--quiet")
        .arg(src.path().join("data.bin"))
        .arg(dst.path().join("data.bin"))
        .assert()
        .success();

    assert_eq!(fs::read(dst.path().join("data.bin")).unwrap(), data);
}

#[test]
fn test_json_output_reports_counts() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("data.bin"), patterned(10_240)).unwrap();

    let mut cmd = cargo_bin_cmd!("ccp");
    let output = cmd
        .arg("--output")
        .arg("json")
        .arg(src.path().join("data.bin"))
        .arg(dst.path().join("data.bin"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["schema_version"], "1.0");
    assert_eq!(payload["bytes_read"], 10_240);
    assert_eq!(payload["bytes_written"], 10_240);
}

#[test]
fn test_copy_empty_file() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("empty"), "").unwrap();

    let mut cmd = cargo_bin_cmd!("ccp");
    let output = cmd
        .arg("--output")
        .arg("json")
        .arg(src.path().join("empty"))
        .arg(dst.path().join("empty"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["bytes_read"], 0);
    assert_eq!(payload["bytes_written"], 0);
    assert_eq!(fs::read(dst.path().join("empty")).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_force_overwrites_existing_destination() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("test.txt"), "new content").unwrap();
    fs::write(dst.path().join("test.txt"), "old content").unwrap();

    let mut cmd = cargo_bin_cmd!("ccp");
    cmd.arg("--force")
        .arg(src.path().join("test.txt"))
        .arg(dst.path().join("test.txt"))
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dst.path().join("test.txt")).unwrap(),
        "new content"
    );
}

#[test]
fn test_repeated_copy_yields_identical_destination() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    let data = patterned(2048);
    fs::write(src.path().join("data.bin"), &data).unwrap();

    for _ in 0..2 {
        let mut cmd = cargo_bin_cmd!("ccp");
        cmd.arg("--force")
            .arg(src.path().join("data.bin"))
            .arg(dst.path().join("data.bin"))
            .assert()
            .success();

        assert_eq!(fs::read(dst.path().join("data.bin")).unwrap(), data);
    }
}
