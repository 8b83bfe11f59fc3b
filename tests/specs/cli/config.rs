// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for `desksync init`, `config`, `schema`, and `completion`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn init_creates_the_work_dir() {
    let temp = TempDir::new().unwrap();

    ds().arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized cascade configuration"));

    assert!(temp.path().join(".desksync/config.toml").is_file());
}

#[test]
fn init_twice_fails() {
    let temp = init_temp();

    ds().arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn config_show_prints_flags_and_tables() {
    let temp = init_temp();

    ds().args(["config", "show"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cascading updates:    on"))
        .stdout(predicate::str::contains("release -> backlog item:"))
        .stdout(predicate::str::contains("deployed     -> completed"));
}

#[test]
fn config_show_json_round_trips() {
    let temp = init_temp();

    let output = ds()
        .args(["config", "show", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["enable_cascading_updates"], true);
    assert_eq!(config["release_to_backlog"]["deployed"], "completed");
}

#[test]
fn config_validate_accepts_the_default() {
    let temp = init_temp();

    ds().args(["config", "validate"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration ok"));
}

#[test]
fn config_validate_reports_gaps() {
    let temp = TempDir::new().unwrap();
    let config = write_fixture(
        &temp,
        "sync.toml",
        "[release_to_backlog]\ndeployed = \"completed\"\n",
    );

    ds().args(["config", "validate", "--config", &config])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("mapping for release status"));
}

#[test]
fn config_discovery_walks_up_from_subdirectories() {
    let temp = init_temp();
    let nested = temp.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    ds().args(["config", "validate"])
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration ok"));
}

#[test]
fn schema_commands_emit_json_schemas() {
    for doc in ["config", "links", "policies", "ticket"] {
        let output = ds().args(["schema", doc]).output().unwrap();
        assert!(output.status.success(), "schema {doc} failed");

        let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(schema["$schema"].is_string(), "schema {doc} missing $schema");
    }
}

#[test]
fn completion_generates_a_script() {
    ds().args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("desksync"));
}
