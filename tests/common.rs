#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vp() -> Command {
    cargo_bin_cmd!("vacaplan")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_vacaplan.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn add_employee(db_path: &str, id: &str, name: &str) {
    vp().args([
        "--db", db_path, "--test", "employee", "add", name, "--id", id,
    ])
    .assert()
    .success();
}

pub fn add_vacation(db_path: &str, id: &str, employee: &str, from: &str, to: &str) {
    vp().args([
        "--db", db_path, "--test", "vacation", "add", "--employee", employee, "--from", from,
        "--to", to, "--id", id,
    ])
    .assert()
    .success();
}

pub fn set_incompat(db_path: &str, of: &str, with: &str) {
    vp().args([
        "--db",
        db_path,
        "--test",
        "employee",
        "set-incompat",
        "--of",
        of,
        "--with",
        with,
    ])
    .assert()
    .success();
}
