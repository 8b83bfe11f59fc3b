// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket snapshot types for the SLA path.
//!
//! A [`Ticket`] is a read-only snapshot supplied by the caller per
//! evaluation; the engine never stores or mutates one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Logged and awaiting triage or assignment.
    Open,
    /// Actively being worked.
    InProgress,
    /// Waiting on the requester or a third party.
    Pending,
    /// Fixed and awaiting confirmation.
    Resolved,
    /// Confirmed done.
    Closed,
}

impl TicketStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Pending => "pending",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    /// Returns true if this is a terminal state (resolved or closed).
    /// SLA clocks stop for terminal tickets.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "in_progress" => Ok(TicketStatus::InProgress),
            "pending" => Ok(TicketStatus::Pending),
            "resolved" => Ok(TicketStatus::Resolved),
            "closed" => Ok(TicketStatus::Closed),
            _ => Err(Error::InvalidTicketStatus(s.to_string())),
        }
    }
}

/// Classification of tickets by their nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    /// Unplanned interruption or degradation of a service.
    Incident,
    /// A request for something new (access, hardware, information).
    ServiceRequest,
    /// Root-cause investigation behind one or more incidents.
    Problem,
    /// A controlled modification to a service.
    Change,
}

impl TicketType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Incident => "incident",
            TicketType::ServiceRequest => "service_request",
            TicketType::Problem => "problem",
            TicketType::Change => "change",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "incident" => Ok(TicketType::Incident),
            "service_request" => Ok(TicketType::ServiceRequest),
            "problem" => Ok(TicketType::Problem),
            "change" => Ok(TicketType::Change),
            _ => Err(Error::InvalidTicketType(s.to_string())),
        }
    }
}

/// Urgency level of a ticket. SLA policies are keyed by (type, priority).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Priority::Critical),
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// A point-in-time snapshot of a ticket, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
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

impl Ticket {
    /// Creates a new open ticket snapshot.
    pub fn new(
        id: String,
        ticket_type: TicketType,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Ticket {
            id,
            ticket_type,
            priority,
            status: TicketStatus::Open,
            created_at,
        }
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
