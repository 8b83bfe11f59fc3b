// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `desksync cascade` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[parameterized(
    in_progress = { "in_progress", "open -> in_progress" },
    deployed = { "deployed", "open -> completed" },
    cancelled = { "cancelled", "open -> deferred" },
)]
fn cascade_follows_the_default_mapping(status: &str, expected: &str) {
    let temp = init_temp();
    let links = write_fixture(
        &temp,
        "links.json",
        r#"[{"kind": "backlog_item", "id": "B1", "status": "open"}]"#,
    );

    ds().args(["cascade", "-r", "R1", "-s", status, "-l", &links])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn cascade_plans_updates_for_open_entities() {
    let temp = init_temp();
    let links = write_fixture(&temp, "links.json", LINKS_OPEN);

    ds().args(["cascade", "-r", "R1", "-s", "deployed", "-l", &links])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("release R1 -> deployed"))
        .stdout(predicate::str::contains("updates (2):"))
        .stdout(predicate::str::contains("open -> completed"))
        .stdout(predicate::str::contains("open -> closed"));
}

#[test]
fn cascade_json_output_is_machine_readable() {
    let temp = init_temp();
    let links = write_fixture(&temp, "links.json", LINKS_OPEN);

    let output = ds()
        .args(["cascade", "-r", "R1", "-s", "deployed", "-l", &links, "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["release_id"], "R1");
    assert_eq!(plan["release_status"], "deployed");
    assert_eq!(plan["updates"].as_array().unwrap().len(), 2);
    assert_eq!(plan["updates"][0]["kind"], "backlog_item");
    assert_eq!(plan["updates"][0]["to"], "completed");
    assert_eq!(plan["notifications"].as_array().unwrap().len(), 2);
}

#[test]
fn cascade_reads_the_snapshot_from_stdin() {
    let temp = init_temp();

    ds().args(["cascade", "-r", "R1", "-s", "deployed", "-l", "-"])
        .current_dir(temp.path())
        .write_stdin(LINKS_OPEN)
        .assert()
        .success()
        .stdout(predicate::str::contains("updates (2):"));
}

#[test]
fn cascade_skips_blocked_items() {
    let temp = init_temp();
    let links = write_fixture(
        &temp,
        "links.json",
        r#"[{"kind": "backlog_item", "id": "B1", "status": "blocked"}]"#,
    );

    ds().args(["cascade", "-r", "R1", "-s", "deployed", "-l", &links])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no updates"))
        .stdout(predicate::str::contains("skipped (1):"))
        .stdout(predicate::str::contains("protected"));
}

#[test]
fn cascade_is_a_no_op_when_disabled() {
    let temp = init_temp();
    std::fs::write(
        temp.path().join(".desksync/config.toml"),
        "enable_cascading_updates = false\n",
    )
    .unwrap();
    let links = write_fixture(&temp, "links.json", LINKS_OPEN);

    ds().args(["cascade", "-r", "R1", "-s", "deployed", "-l", &links])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no updates"))
        .stdout(predicate::str::contains("cascading_disabled"));
}

#[test]
fn cascade_rejects_an_unknown_status() {
    let temp = init_temp();
    let links = write_fixture(&temp, "links.json", LINKS_OPEN);

    ds().args(["cascade", "-r", "R1", "-s", "shipped", "-l", &links])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid release status"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn cascade_requires_an_initialized_directory() {
    let temp = TempDir::new().unwrap();
    let links = write_fixture(&temp, "links.json", LINKS_OPEN);

    ds().args(["cascade", "-r", "R1", "-s", "deployed", "-l", &links])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn cascade_honors_an_explicit_config_file() {
    // No init: the --config file stands in for discovery.
    let temp = TempDir::new().unwrap();
    let config = write_fixture(&temp, "sync.toml", "notify_on_status_change = false\n");
    let links = write_fixture(&temp, "links.json", LINKS_OPEN);

    let output = ds()
        .args([
            "cascade", "-r", "R1", "-s", "deployed", "-l", &links, "-o", "json", "--config",
            &config,
        ])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["updates"].as_array().unwrap().len(), 2);
    assert!(plan["notifications"].as_array().unwrap().is_empty());
}
