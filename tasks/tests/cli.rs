//! Integration test: drive the `tasks` binary the way a user would.

use std::{fs, path::Path, process::Command};

fn tasks(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tasks"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn bike_lock_reads_and_writes_default_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("DISTANCE.INP"), "9218\n2574\n").unwrap();

    let status = tasks(dir.path()).arg("bike-lock").status().unwrap();
    assert!(status.success());

    let answer = fs::read_to_string(dir.path().join("DISTANCE.OUT")).unwrap();
    assert_eq!(answer.trim(), "14");
}

#[test]
fn bike_lock_strict_fails_on_unequal_lengths() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("codes.txt");
    fs::write(&input, "1234\n34\n").unwrap();

    let out = tasks(dir.path())
        .args(&["bike-lock", "--strict", "-o", "-", "-i"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("code lengths differ"));
}

#[test]
fn number_to_date_from_flag() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasks(dir.path())
        .args(&["number-to-date", "--offset", "149808"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Date (DD/MM/YYYY): 29/02/2400\n"
    );
}

#[test]
fn number_to_date_rejects_negative_offset() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasks(dir.path())
        .args(&["number-to-date", "--offset", "-3"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("negative day offset -3"));
}
