// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ds-engine operations.

use thiserror::Error;

use crate::status::{EntityKind, ReleaseStatus};

/// All possible errors that can occur in ds-engine operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no {kind} mapping for release status '{status}'\n  hint: the status mapping must cover every release status")]
    MissingMapping {
        kind: EntityKind,
        status: ReleaseStatus,
    },

    #[error("invalid release status: '{0}'\n  hint: valid statuses are: planned, in_progress, deployed, cancelled")]
    InvalidReleaseStatus(String),

    #[error("invalid backlog status: '{0}'\n  hint: valid statuses are: open, in_progress, completed, deferred, blocked")]
    InvalidBacklogStatus(String),

    #[error("invalid bug status: '{0}'\n  hint: valid statuses are: open, in_progress, closed")]
    InvalidBugStatus(String),

    #[error("invalid ticket status: '{0}'\n  hint: valid statuses are: open, in_progress, pending, resolved, closed")]
    InvalidTicketStatus(String),

    #[error("invalid ticket type: '{0}'\n  hint: valid types are: incident, service_request, problem, change")]
    InvalidTicketType(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: critical, high, medium, low")]
    InvalidPriority(String),

    #[error("invalid SLA type: '{0}'\n  hint: valid types are: response, resolution")]
    InvalidSlaType(String),

    #[error("invalid entity kind: '{0}'\n  hint: valid kinds are: backlog_item, bug")]
    InvalidEntityKind(String),

    #[error("invalid SLA policy: {0}")]
    InvalidPolicy(String),
}

/// A specialized Result type for ds-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
