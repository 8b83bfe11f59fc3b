// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `desksync sla` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn sla_reports_time_left_within_budget() {
    let temp = TempDir::new().unwrap();
    let ticket = write_fixture(&temp, "ticket.json", TICKET_OPEN);
    let policies = write_fixture(&temp, "policies.json", POLICIES);

    ds().args([
        "sla", "-t", &ticket, "-s", "resolution", "-p", &policies, "--now",
        "2026-03-01T14:00:00Z",
    ])
    .current_dir(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("INC-1  incident/critical resolution"))
    .stdout(predicate::str::contains("status: ok"))
    .stdout(predicate::str::contains("time left: 3h 0m left (37.5% of budget)"));
}

#[test]
fn sla_json_output_carries_the_derived_fields() {
    let temp = TempDir::new().unwrap();
    let ticket = write_fixture(&temp, "ticket.json", TICKET_OPEN);
    let policies = write_fixture(&temp, "policies.json", POLICIES);

    let output = ds()
        .args([
            "sla", "-t", &ticket, "-s", "resolution", "-p", &policies, "--now",
            "2026-03-01T14:00:00Z", "-o", "json",
        ])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["status"], "ok");
    assert_eq!(info["time_left_minutes"], 180);
    assert_eq!(info["percent_left"], 37.5);
    assert_eq!(info["completed"], false);
    assert_eq!(info["sla_type"], "resolution");
}

#[test]
fn sla_reports_a_breach_as_overdue() {
    let temp = TempDir::new().unwrap();
    let ticket = write_fixture(&temp, "ticket.json", TICKET_OPEN);
    let policies = write_fixture(&temp, "policies.json", POLICIES);

    ds().args([
        "sla", "-t", &ticket, "-s", "response", "-p", &policies, "--now",
        "2026-03-01T10:30:00Z",
    ])
    .current_dir(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("status: breached"))
    .stdout(predicate::str::contains("0h 30m overdue"));
}

#[test]
fn sla_treats_a_closed_ticket_as_completed() {
    let temp = TempDir::new().unwrap();
    let closed = TICKET_OPEN.replace("\"open\"", "\"closed\"");
    let ticket = write_fixture(&temp, "ticket.json", &closed);
    let policies = write_fixture(&temp, "policies.json", POLICIES);

    ds().args([
        "sla", "-t", &ticket, "-s", "resolution", "-p", &policies, "--now",
        "2027-01-01T00:00:00Z",
    ])
    .current_dir(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("status: ok (no running budget)"));
}

#[test]
fn sla_without_an_applicable_policy_is_completed() {
    let temp = TempDir::new().unwrap();
    let ticket = write_fixture(&temp, "ticket.json", TICKET_OPEN);
    let policies = write_fixture(&temp, "policies.json", "[]");

    ds().args([
        "sla", "-t", &ticket, "-s", "resolution", "-p", &policies, "--now",
        "2027-01-01T00:00:00Z",
    ])
    .current_dir(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("(no running budget)"));
}

#[test]
fn sla_reads_the_ticket_from_stdin() {
    let temp = TempDir::new().unwrap();
    let policies = write_fixture(&temp, "policies.json", POLICIES);

    ds().args([
        "sla", "-t", "-", "-s", "response", "-p", &policies, "--now",
        "2026-03-01T09:30:00Z",
    ])
    .current_dir(temp.path())
    .write_stdin(TICKET_OPEN)
    .assert()
    .success()
    .stdout(predicate::str::contains("status: ok"));
}

#[test]
fn sla_rejects_a_malformed_now() {
    let temp = TempDir::new().unwrap();
    let ticket = write_fixture(&temp, "ticket.json", TICKET_OPEN);
    let policies = write_fixture(&temp, "policies.json", POLICIES);

    ds().args([
        "sla", "-t", &ticket, "-s", "resolution", "-p", &policies, "--now", "yesterday",
    ])
    .current_dir(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid --now value"))
    .stderr(predicate::str::contains("RFC 3339"));
}

#[test]
fn sla_rejects_an_unknown_budget_type() {
    let temp = TempDir::new().unwrap();
    let ticket = write_fixture(&temp, "ticket.json", TICKET_OPEN);
    let policies = write_fixture(&temp, "policies.json", POLICIES);

    ds().args(["sla", "-t", &ticket, "-s", "review", "-p", &policies])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid SLA type"));
}
