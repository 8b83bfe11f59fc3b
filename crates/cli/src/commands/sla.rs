// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};

use ds_engine::{evaluate, ClockSource, SlaPolicy, SlaType, SystemClock, Ticket};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display;
use crate::error::{Error, Result};

pub fn run(
    ticket: &str,
    sla: &str,
    policies: &str,
    now: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let sla_type: SlaType = sla.parse()?;
    let ticket: Ticket = super::parse_snapshot(ticket)?;
    let policies: Vec<SlaPolicy> = super::parse_snapshot(policies)?;
    for policy in &policies {
        policy.validate()?;
    }
    warn_on_duplicates(&policies);

    let now = resolve_now(now)?;
    tracing::debug!(
        "evaluating {} against {} policies at {}",
        ticket.id,
        policies.len(),
        now
    );

    let info = evaluate(&ticket, sla_type, &policies, now);

    match output {
        OutputFormat::Text => {
            let status_label = colors::sla_status(info.status);
            print!("{}", display::format_sla(&ticket, &info, &status_label));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
    }
    Ok(())
}

/// Parse the `--now` override, falling back to the system clock.
fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|t| t.to_utc())
            .map_err(|_| Error::InvalidNow(s.to_string())),
        None => Ok(SystemClock.now()),
    }
}

/// First match wins on duplicate (type, priority) keys; surface that the
/// policy store needs cleaning.
fn warn_on_duplicates(policies: &[SlaPolicy]) {
    for (i, policy) in policies.iter().enumerate() {
        let shadowed = policies[..i]
            .iter()
            .any(|p| p.ticket_type == policy.ticket_type && p.priority == policy.priority);
        if shadowed {
            tracing::warn!(
                "duplicate SLA policy for {}/{}; first match wins",
                policy.ticket_type,
                policy.priority
            );
        }
    }
}

#[cfg(test)]
#[path = "sla_tests.rs"]
mod tests;
