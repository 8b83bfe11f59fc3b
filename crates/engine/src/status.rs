// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status domains for the cascade path.
//!
//! Each status domain is a closed enum so that invalid states are
//! unrepresentable and mapping totality can be checked at load time:
//! ReleaseStatus (the cascade source), BacklogStatus and BugStatus (the
//! cascade targets), and EntityKind (which target domain an entity
//! belongs to).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Lifecycle status of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStatus {
    /// Scheduled but not yet started.
    Planned,
    /// Actively being worked toward deployment.
    InProgress,
    /// Shipped to production.
    Deployed,
    /// Abandoned; will not ship.
    Cancelled,
}

impl ReleaseStatus {
    /// Every release status, in declaration order. Used for totality checks.
    pub const ALL: [ReleaseStatus; 4] = [
        ReleaseStatus::Planned,
        ReleaseStatus::InProgress,
        ReleaseStatus::Deployed,
        ReleaseStatus::Cancelled,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseStatus::Planned => "planned",
            ReleaseStatus::InProgress => "in_progress",
            ReleaseStatus::Deployed => "deployed",
            ReleaseStatus::Cancelled => "cancelled",
        }
    }

    /// Returns true for states after which no further cascades are expected
    /// (deployed or cancelled). Not hard-enforced by the propagator.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReleaseStatus::Deployed | ReleaseStatus::Cancelled)
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReleaseStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(ReleaseStatus::Planned),
            "in_progress" => Ok(ReleaseStatus::InProgress),
            "deployed" => Ok(ReleaseStatus::Deployed),
            "cancelled" => Ok(ReleaseStatus::Cancelled),
            _ => Err(Error::InvalidReleaseStatus(s.to_string())),
        }
    }
}

/// Workflow status of a backlog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklogStatus {
    /// Not yet started.
    Open,
    /// Currently being worked on.
    InProgress,
    /// Finished work. Protected from cascades unless overrides are allowed.
    Completed,
    /// Intentionally postponed.
    Deferred,
    /// Waiting on something external. Never overwritten by a cascade.
    Blocked,
}

impl BacklogStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            BacklogStatus::Open => "open",
            BacklogStatus::InProgress => "in_progress",
            BacklogStatus::Completed => "completed",
            BacklogStatus::Deferred => "deferred",
            BacklogStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for BacklogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BacklogStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(BacklogStatus::Open),
            "in_progress" => Ok(BacklogStatus::InProgress),
            "completed" => Ok(BacklogStatus::Completed),
            "deferred" => Ok(BacklogStatus::Deferred),
            "blocked" => Ok(BacklogStatus::Blocked),
            _ => Err(Error::InvalidBacklogStatus(s.to_string())),
        }
    }
}

/// Workflow status of a bug. Fixed/verified collapse into closed for
/// cascade purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BugStatus {
    /// Reported and unresolved.
    Open,
    /// Currently being fixed.
    InProgress,
    /// Fixed or otherwise resolved. Protected from cascades unless
    /// overrides are allowed.
    Closed,
}

impl BugStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            BugStatus::Open => "open",
            BugStatus::InProgress => "in_progress",
            BugStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for BugStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BugStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(BugStatus::Open),
            "in_progress" => Ok(BugStatus::InProgress),
            "closed" => Ok(BugStatus::Closed),
            _ => Err(Error::InvalidBugStatus(s.to_string())),
        }
    }
}

/// Which target domain a linked entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    BacklogItem,
    Bug,
}

impl EntityKind {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::BacklogItem => "backlog_item",
            EntityKind::Bug => "bug",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "backlog_item" => Ok(EntityKind::BacklogItem),
            "bug" => Ok(EntityKind::Bug),
            _ => Err(Error::InvalidEntityKind(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
