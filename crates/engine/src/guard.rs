// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Override guard: decides whether a cascade may overwrite an entity's
//! current status.
//!
//! This is the single source of truth for protected states. Protection is
//! a decision table keyed by (entity kind, current status):
//!
//! - `Overridable`: completed backlog items and closed bugs. Overwritten
//!   only when `allow_overrides` is set.
//! - `Always`: blocked backlog items. Never overwritten by a cascade;
//!   unblocking is a deliberate manual action.
//!
//! Independent of protection, active work never regresses to not-started
//! (`in_progress` -> `open` is denied), and a candidate equal to the
//! current status is a no-op.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SyncConfig;
use crate::status::{BacklogStatus, BugStatus};

/// How strongly a current status resists being overwritten by a cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    /// Freely overwritable.
    None,
    /// Overwritable only when `allow_overrides` is set.
    Overridable,
    /// Never overwritten by a cascade.
    Always,
}

/// Why an entity was left out of a cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// `enable_cascading_updates` is off.
    CascadingDisabled,
    /// The mapped candidate equals the current status.
    NoChange,
    /// The current status is protected and may not be overwritten.
    Protected,
    /// The update would regress active work to not-started.
    Regression,
}

impl SkipReason {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::CascadingDisabled => "cascading_disabled",
            SkipReason::NoChange => "no_change",
            SkipReason::Protected => "protected",
            SkipReason::Regression => "regression",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The cascade may apply the candidate status.
    Allow,
    /// The entity is skipped, with the reason the caller can surface.
    Skip(SkipReason),
}

impl Verdict {
    /// Returns true if the cascade may proceed.
    pub fn is_allow(&self) -> bool {
        matches!(self, Verdict::Allow)
    }
}

/// Protection level for a backlog item's current status.
pub fn backlog_protection(status: BacklogStatus) -> Protection {
    match status {
        BacklogStatus::Completed => Protection::Overridable,
        BacklogStatus::Blocked => Protection::Always,
        _ => Protection::None,
    }
}

/// Protection level for a bug's current status.
pub fn bug_protection(status: BugStatus) -> Protection {
    match status {
        BugStatus::Closed => Protection::Overridable,
        _ => Protection::None,
    }
}

fn check(protection: Protection, no_change: bool, regresses: bool, config: &SyncConfig) -> Verdict {
    if !config.enable_cascading_updates {
        return Verdict::Skip(SkipReason::CascadingDisabled);
    }
    if no_change {
        return Verdict::Skip(SkipReason::NoChange);
    }
    match protection {
        Protection::Always => return Verdict::Skip(SkipReason::Protected),
        Protection::Overridable if !config.allow_overrides => {
            return Verdict::Skip(SkipReason::Protected);
        }
        _ => {}
    }
    if regresses {
        return Verdict::Skip(SkipReason::Regression);
    }
    Verdict::Allow
}

/// Guard check for cascading `candidate` onto a backlog item currently in
/// `current`.
pub fn backlog_verdict(
    current: BacklogStatus,
    candidate: BacklogStatus,
    config: &SyncConfig,
) -> Verdict {
    check(
        backlog_protection(current),
        current == candidate,
        current == BacklogStatus::InProgress && candidate == BacklogStatus::Open,
        config,
    )
}

/// Guard check for cascading `candidate` onto a bug currently in `current`.
pub fn bug_verdict(current: BugStatus, candidate: BugStatus, config: &SyncConfig) -> Verdict {
    check(
        bug_protection(current),
        current == candidate,
        current == BugStatus::InProgress && candidate == BugStatus::Open,
        config,
    )
}

/// Predicate form: may a cascade overwrite this backlog item's status?
pub fn can_update_backlog(
    current: BacklogStatus,
    candidate: BacklogStatus,
    config: &SyncConfig,
) -> bool {
    backlog_verdict(current, candidate, config).is_allow()
}

/// Predicate form: may a cascade overwrite this bug's status?
pub fn can_update_bug(current: BugStatus, candidate: BugStatus, config: &SyncConfig) -> bool {
    bug_verdict(current, candidate, config).is_allow()
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
