//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve() {
    let mut cmd = Command::cargo_bin("itemsvc").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("itemsvc").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("PORT"));
}

#[test]
fn test_serve_exits_nonzero_on_bad_database_url() {
    let mut cmd = Command::cargo_bin("itemsvc").unwrap();
    cmd.env("RUST_LOG", "off")
        .env("HOST", "127.0.0.1")
        .arg("serve")
        .arg("--port")
        .arg("0")
        .arg("--database-url")
        .arg("not a database url");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create database pool"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("itemsvc").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
