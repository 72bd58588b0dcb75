//! Binary-level tests for the argument surface and the offline paths.
//! Anything that would hit the network is covered at the library layer
//! against the in-memory backend instead.

use assert_cmd::Command;
use predicates::prelude::*;

fn jot(temp_home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jot").unwrap();
    cmd.env("XDG_CONFIG_HOME", temp_home.path())
        .env("HOME", temp_home.path())
        .env_remove("JOT_TOKEN");
    cmd
}

#[test]
fn help_lists_the_subcommands() {
    let home = tempfile::tempdir().unwrap();
    jot(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("replace"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn unauthenticated_home_renders_the_lander() {
    let home = tempfile::tempdir().unwrap();
    jot(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Scratch"))
        .stdout(predicate::str::contains("jot login"));
}

#[test]
fn config_prints_defaults() {
    let home = tempfile::tempdir().unwrap();
    jot(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max-attachment-size = 5000000"));
}

#[test]
fn login_stores_the_token() {
    let home = tempfile::tempdir().unwrap();
    jot(&home)
        .args(["login", "--token", "test-token"])
        .assert()
        .success()
        .stdout(predicate::str::contains("signed in"));
}

#[test]
fn replace_requires_both_terms() {
    let home = tempfile::tempdir().unwrap();
    jot(&home).args(["replace", "onlyfind"]).assert().failure();
}

#[test]
fn delete_requires_an_id() {
    let home = tempfile::tempdir().unwrap();
    jot(&home).arg("delete").assert().failure();
}
