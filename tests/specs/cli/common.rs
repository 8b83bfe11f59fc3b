// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn ds() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("desksync").unwrap()
}

/// Helper to create a temp directory with an initialized configuration.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    ds().arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Write a fixture file into the temp directory and return its name.
pub fn write_fixture(temp: &TempDir, name: &str, content: &str) -> String {
    std::fs::write(temp.path().join(name), content).unwrap();
    name.to_string()
}

/// A linked-entity snapshot with one open backlog item and one open bug.
pub const LINKS_OPEN: &str = r#"[
    {"kind": "backlog_item", "id": "B1", "status": "open"},
    {"kind": "bug", "id": "BUG-2", "status": "open"}
]"#;

/// An incident/critical ticket opened at a fixed instant.
pub const TICKET_OPEN: &str = r#"{
    "id": "INC-1",
    "ticket_type": "incident",
    "priority": "critical",
    "status": "open",
    "created_at": "2026-03-01T09:00:00Z"
}"#;

/// A single-policy set: incident/critical, 1h response, 8h resolution.
pub const POLICIES: &str = r#"[
    {"ticket_type": "incident", "priority": "critical",
     "response_time_hours": 1.0, "resolution_time_hours": 8.0}
]"#;
