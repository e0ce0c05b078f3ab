#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworkout::models::workout::WorkoutRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary under test, with HOME pointed at `home` so the real config is
/// never read or written.
pub fn rwo(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rworkout");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Fresh temp dir plus the workout file path inside it (not created).
pub fn setup_test_file(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(format!("{name}_workouts.json"));
    (dir, path)
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Write raw content to the workout file.
pub fn write_raw(path: &Path, content: &str) {
    fs::write(path, content).expect("write raw workout file");
}

pub fn record(id: u64, date: &str, completed: bool, kind: &str) -> WorkoutRecord {
    WorkoutRecord {
        id,
        date: date.to_string(),
        completed,
        kind: kind.to_string(),
        comment: String::new(),
    }
}

/// Add a couple of sessions through the CLI.
pub fn add_sample_sessions(home: &Path, file: &str) {
    rwo(home)
        .args(["--file", file, "add", "push_ups", "--done", "--comment", "morning"])
        .assert()
        .success();

    rwo(home)
        .args(["--file", file, "add", "strength_set", "--skipped"])
        .assert()
        .success();

    rwo(home)
        .args(["--file", file, "add", "strength_set", "--done"])
        .assert()
        .success();
}
