//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("dormkeep").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("dormkeep").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("dormkeep").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert().failure();
}

#[test]
fn test_init_db_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dorm.db");
    let url = format!("sqlite://{}", path.display());

    let mut cmd = Command::cargo_bin("dormkeep").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .arg("init-db")
        .arg("--database-url")
        .arg(&url);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Schema ready"));
    assert!(path.exists());
}
