// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cascade configuration: the status mapping tables and behavior flags.
//!
//! A [`SyncConfig`] is owned by the calling application and passed by
//! reference into every engine call. It never lives in global state.
//!
//! Invariant: every [`ReleaseStatus`] has exactly one entry in each mapping
//! table. [`SyncConfig::validate`] checks this once at load time; the
//! per-call lookups keep a defensive check.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::status::{BacklogStatus, BugStatus, EntityKind, ReleaseStatus};

/// Configuration for status cascades from releases to linked entities.
///
/// Flags come before the mapping tables so the TOML form serializes
/// scalars ahead of the `[release_to_*]` tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Master switch: when false, cascades are a no-op.
    #[serde(default = "default_true")]
    pub enable_cascading_updates: bool,

    /// Part of the config contract only; date propagation is applied by an
    /// external collaborator, not by this engine.
    #[serde(default = "default_true")]
    pub enable_date_synchronization: bool,

    /// When true, each emitted status change also emits a notification
    /// intent for the caller's delivery channels.
    #[serde(default = "default_true")]
    pub notify_on_status_change: bool,

    /// When true, cascades may overwrite protected-but-overridable states
    /// (completed backlog items, closed bugs).
    #[serde(default = "default_true")]
    pub allow_overrides: bool,

    /// Release status -> backlog item status mapping.
    #[serde(default = "default_backlog_mapping")]
    pub release_to_backlog: BTreeMap<ReleaseStatus, BacklogStatus>,

    /// Release status -> bug status mapping.
    #[serde(default = "default_bug_mapping")]
    pub release_to_bug: BTreeMap<ReleaseStatus, BugStatus>,
}

fn default_true() -> bool {
    true
}

fn default_backlog_mapping() -> BTreeMap<ReleaseStatus, BacklogStatus> {
    BTreeMap::from([
        (ReleaseStatus::Planned, BacklogStatus::Open),
        (ReleaseStatus::InProgress, BacklogStatus::InProgress),
        (ReleaseStatus::Deployed, BacklogStatus::Completed),
        (ReleaseStatus::Cancelled, BacklogStatus::Deferred),
    ])
}

fn default_bug_mapping() -> BTreeMap<ReleaseStatus, BugStatus> {
    BTreeMap::from([
        (ReleaseStatus::Planned, BugStatus::Open),
        (ReleaseStatus::InProgress, BugStatus::InProgress),
        (ReleaseStatus::Deployed, BugStatus::Closed),
        // A cancelled release returns its bugs to the pool.
        (ReleaseStatus::Cancelled, BugStatus::Open),
    ])
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            enable_cascading_updates: true,
            enable_date_synchronization: true,
            notify_on_status_change: true,
            allow_overrides: true,
            release_to_backlog: default_backlog_mapping(),
            release_to_bug: default_bug_mapping(),
        }
    }
}

impl SyncConfig {
    /// Checks that both mapping tables cover every release status.
    ///
    /// Intended to run once when the configuration is loaded. Returns the
    /// first gap found as [`Error::MissingMapping`].
    pub fn validate(&self) -> Result<()> {
        for status in ReleaseStatus::ALL {
            self.backlog_target(status)?;
            self.bug_target(status)?;
        }
        Ok(())
    }

    /// Looks up the backlog item status a release status cascades to.
    pub fn backlog_target(&self, status: ReleaseStatus) -> Result<BacklogStatus> {
        self.release_to_backlog
            .get(&status)
            .copied()
            .ok_or(Error::MissingMapping {
                kind: EntityKind::BacklogItem,
                status,
            })
    }

    /// Looks up the bug status a release status cascades to.
    pub fn bug_target(&self, status: ReleaseStatus) -> Result<BugStatus> {
        self.release_to_bug
            .get(&status)
            .copied()
            .ok_or(Error::MissingMapping {
                kind: EntityKind::Bug,
                status,
            })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
