// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SLA derivation: policy selection and the SLA clock.
//!
//! [`evaluate`] computes a fresh [`SlaInfo`] from a ticket snapshot, a
//! policy set, and an explicit `now`. Nothing is cached and no global
//! clock is read, so evaluation is safe from any thread and trivially
//! testable.
//!
//! All time math is whole minutes; negative `time_left_minutes` is valid
//! and means the budget is overdue by that amount.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::ticket::{Priority, Ticket, TicketType};

/// Fraction of the budget under which an SLA turns to warning.
/// The comparison is strict: exactly 20% remaining is still ok.
pub const WARNING_FRACTION: f64 = 0.2;

/// Which time budget a ticket is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaType {
    /// Time until first response.
    Response,
    /// Time until resolution.
    Resolution,
}

impl SlaType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlaType::Response => "response",
            SlaType::Resolution => "resolution",
        }
    }
}

impl fmt::Display for SlaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SlaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "response" => Ok(SlaType::Response),
            "resolution" => Ok(SlaType::Resolution),
            _ => Err(Error::InvalidSlaType(s.to_string())),
        }
    }
}

/// Derived health of an SLA budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaStatus {
    /// Comfortably within budget.
    Ok,
    /// Under 20% of the budget remains.
    Warning,
    /// The budget is spent; the ticket is overdue.
    Breached,
}

impl SlaStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlaStatus::Ok => "ok",
            SlaStatus::Warning => "warning",
            SlaStatus::Breached => "breached",
        }
    }
}

impl fmt::Display for SlaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Time budgets for one (ticket type, priority) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaPolicy {
    /// Ticket classification this policy applies to.
    pub ticket_type: TicketType,
    /// Priority level this policy applies to.
    pub priority: Priority,
    /// Response budget in hours. Must be positive.
    pub response_time_hours: f64,
    /// Resolution budget in hours. Must be positive.
    pub resolution_time_hours: f64,
}

impl SlaPolicy {
    /// The budget in hours for the chosen SLA type.
    pub fn budget_hours(&self, sla_type: SlaType) -> f64 {
        match sla_type {
            SlaType::Response => self.response_time_hours,
            SlaType::Resolution => self.resolution_time_hours,
        }
    }

    /// Checks that both budgets are positive.
    pub fn validate(&self) -> Result<()> {
        if self.response_time_hours <= 0.0 || self.resolution_time_hours <= 0.0 {
            return Err(Error::InvalidPolicy(format!(
                "{}/{}: SLA hours must be positive",
                self.ticket_type, self.priority
            )));
        }
        Ok(())
    }
}

/// Derived SLA state for one ticket and one SLA type. Computed fresh on
/// every evaluation; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaInfo {
    /// Derived health.
    pub status: SlaStatus,
    /// Minutes until the budget is spent; negative when overdue.
    pub time_left_minutes: i64,
    /// Share of the budget remaining, clamped to 0..=100.
    pub percent_left: f64,
    /// True when the ticket is terminal or no policy applies; the clock
    /// no longer runs.
    pub completed: bool,
    /// Which budget was measured.
    pub sla_type: SlaType,
    /// Human label of the measured budget, e.g. "incident/critical response".
    pub sla_name: String,
    /// Rendered time remaining, e.g. "2h 15m left" or "0h 30m overdue".
    /// Empty when `completed`.
    pub time_left: String,
}

impl SlaInfo {
    fn completed(sla_type: SlaType, sla_name: String) -> Self {
        SlaInfo {
            status: SlaStatus::Ok,
            time_left_minutes: 0,
            percent_left: 100.0,
            completed: true,
            sla_type,
            sla_name,
            time_left: String::new(),
        }
    }
}

/// Selects the applicable policy for a (ticket type, priority) pair.
///
/// Exact match only; the first match wins when the set contains
/// duplicates. `None` means "no applicable SLA", which is a defined
/// outcome, not an error.
pub fn select_policy(
    ticket_type: TicketType,
    priority: Priority,
    policies: &[SlaPolicy],
) -> Option<&SlaPolicy> {
    policies
        .iter()
        .find(|p| p.ticket_type == ticket_type && p.priority == priority)
}

/// Evaluates one ticket against one SLA budget at an explicit `now`.
///
/// Terminal tickets and tickets with no applicable policy yield a
/// completed/ok descriptor regardless of elapsed time. A non-positive
/// budget is treated as no applicable SLA.
pub fn evaluate(
    ticket: &Ticket,
    sla_type: SlaType,
    policies: &[SlaPolicy],
    now: DateTime<Utc>,
) -> SlaInfo {
    let sla_name = format!(
        "{}/{} {}",
        ticket.ticket_type, ticket.priority, sla_type
    );

    if ticket.status.is_terminal() {
        return SlaInfo::completed(sla_type, sla_name);
    }
    let Some(policy) = select_policy(ticket.ticket_type, ticket.priority, policies) else {
        return SlaInfo::completed(sla_type, sla_name);
    };

    let total_minutes = (policy.budget_hours(sla_type) * 60.0).round() as i64;
    if total_minutes <= 0 {
        return SlaInfo::completed(sla_type, sla_name);
    }

    let elapsed_minutes = (now - ticket.created_at).num_minutes();
    let time_left_minutes = total_minutes - elapsed_minutes;
    let percent_left =
        (time_left_minutes as f64 / total_minutes as f64 * 100.0).clamp(0.0, 100.0);

    let status = if time_left_minutes < 0 {
        SlaStatus::Breached
    } else if (time_left_minutes as f64) < total_minutes as f64 * WARNING_FRACTION {
        SlaStatus::Warning
    } else {
        SlaStatus::Ok
    };

    SlaInfo {
        status,
        time_left_minutes,
        percent_left,
        completed: false,
        sla_type,
        sla_name,
        time_left: format_time_left(time_left_minutes),
    }
}

/// Renders minutes remaining as "{h}h {m}m left", or "{h}h {m}m overdue"
/// for negative values. Public so presentation layers reuse the exact
/// format.
pub fn format_time_left(minutes: i64) -> String {
    let abs = minutes.unsigned_abs();
    let suffix = if minutes < 0 { "overdue" } else { "left" };
    format!("{}h {}m {}", abs / 60, abs % 60, suffix)
}

#[cfg(test)]
#[path = "sla_tests.rs"]
mod tests;
