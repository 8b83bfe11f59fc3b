// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for the JSON/TOML input documents.
//!
//! These are separate from the runtime types to allow schema-specific
//! annotations and to avoid adding schemars to production input paths.
//! They exist purely for deriving JSON Schema definitions; the `schema`
//! command is their only consumer.

// Allow unused variants - these types exist only for schema generation
#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

/// Lifecycle status of a release.
#[derive(JsonSchema, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStatus {
    Planned,
    InProgress,
    Deployed,
    Cancelled,
}

/// Workflow status of a backlog item.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BacklogStatus {
    Open,
    InProgress,
    Completed,
    Deferred,
    Blocked,
}

/// Workflow status of a bug.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BugStatus {
    Open,
    InProgress,
    Closed,
}

/// Workflow status of a ticket.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Pending,
    Resolved,
    Closed,
}

/// Classification of tickets by their nature.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    Incident,
    ServiceRequest,
    Problem,
    Change,
}

/// Urgency level of a ticket.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

/// The config.toml document consumed by every command.
#[derive(JsonSchema, Serialize)]
pub struct ConfigDoc {
    /// Master switch: when false, cascades are a no-op.
    pub enable_cascading_updates: bool,
    /// Carried for the caller's date-propagation layer.
    pub enable_date_synchronization: bool,
    /// Emit a notification intent per successful status change.
    pub notify_on_status_change: bool,
    /// Allow cascades to overwrite completed items and closed bugs.
    pub allow_overrides: bool,
    /// Release status -> backlog item status mapping.
    pub release_to_backlog: BTreeMap<ReleaseStatus, BacklogStatus>,
    /// Release status -> bug status mapping.
    pub release_to_bug: BTreeMap<ReleaseStatus, BugStatus>,
}

/// One entry of the linked-entity snapshot consumed by 'cascade'.
#[derive(JsonSchema, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkedEntityDoc {
    /// A backlog item contained in the release.
    BacklogItem { id: String, status: BacklogStatus },
    /// A bug linked to the release through its backlog items.
    Bug { id: String, status: BugStatus },
}

/// The linked-entity snapshot consumed by 'cascade'.
#[derive(JsonSchema, Serialize)]
pub struct LinksDoc(pub Vec<LinkedEntityDoc>);

/// One policy of the set consumed by 'sla'.
#[derive(JsonSchema, Serialize)]
pub struct PolicyDoc {
    /// Ticket classification this policy applies to.
    pub ticket_type: TicketType,
    /// Priority level this policy applies to.
    pub priority: Priority,
    /// Response budget in hours. Must be positive.
    pub response_time_hours: f64,
    /// Resolution budget in hours. Must be positive.
    pub resolution_time_hours: f64,
}

/// The policy set consumed by 'sla'.
#[derive(JsonSchema, Serialize)]
pub struct PoliciesDoc(pub Vec<PolicyDoc>);

/// The ticket snapshot consumed by 'sla'.
#[derive(JsonSchema, Serialize)]
pub struct TicketDoc {
    /// Unique identifier.
    pub id: String,
    /// Classification of the ticket.
    pub ticket_type: TicketType,
    /// Urgency level.
    pub priority: Priority,
    /// Current workflow state.
    pub status: TicketStatus,
    /// When the ticket was created. SLA clocks start here.
    pub created_at: DateTime<Utc>,
}
