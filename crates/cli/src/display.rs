// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of cascade plans, SLA descriptors, and the
//! configuration. Kept pure (string in, string out) so it stays unit
//! testable; coloring is applied by the caller.

use ds_engine::{CascadeOutcome, SlaInfo, StatusUpdateIntent, SyncConfig, Ticket};

/// Render a cascade outcome as an operator-readable plan.
pub fn format_outcome(outcome: &CascadeOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "release {} -> {}\n",
        outcome.release_id, outcome.release_status
    ));

    if outcome.updates.is_empty() {
        out.push_str("\nno updates\n");
    } else {
        out.push_str(&format!("\nupdates ({}):\n", outcome.updates.len()));
        for update in &outcome.updates {
            let (from, to) = update_statuses(update);
            out.push_str(&format!(
                "  {:<14} {:<13} {} -> {}\n",
                update.id(),
                update.kind().to_string(),
                from,
                to
            ));
        }
    }

    if !outcome.notifications.is_empty() {
        out.push_str(&format!(
            "\nnotifications ({}):\n",
            outcome.notifications.len()
        ));
        for n in &outcome.notifications {
            out.push_str(&format!(
                "  {:<14} {:<13} {} -> {}\n",
                n.entity_id,
                n.kind.to_string(),
                n.old_value,
                n.new_value
            ));
        }
    }

    if !outcome.skipped.is_empty() {
        out.push_str(&format!("\nskipped ({}):\n", outcome.skipped.len()));
        for s in &outcome.skipped {
            out.push_str(&format!(
                "  {:<14} {:<13} {}\n",
                s.id,
                s.kind.to_string(),
                s.reason
            ));
        }
    }

    out
}

fn update_statuses(update: &StatusUpdateIntent) -> (String, String) {
    match update {
        StatusUpdateIntent::BacklogItem { from, to, .. } => (from.to_string(), to.to_string()),
        StatusUpdateIntent::Bug { from, to, .. } => (from.to_string(), to.to_string()),
    }
}

/// Render an SLA descriptor for one ticket. `status_label` is the
/// (possibly colorized) health string.
pub fn format_sla(ticket: &Ticket, info: &SlaInfo, status_label: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  {}\n", ticket.id, info.sla_name));
    if info.completed {
        out.push_str(&format!("  status: {} (no running budget)\n", status_label));
    } else {
        out.push_str(&format!("  status: {}\n", status_label));
        out.push_str(&format!(
            "  time left: {} ({:.1}% of budget)\n",
            info.time_left, info.percent_left
        ));
    }
    out
}

/// Render the configuration as a flag summary plus both mapping tables.
pub fn format_config(config: &SyncConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "cascading updates:    {}\n",
        on_off(config.enable_cascading_updates)
    ));
    out.push_str(&format!(
        "date synchronization: {}\n",
        on_off(config.enable_date_synchronization)
    ));
    out.push_str(&format!(
        "notify on change:     {}\n",
        on_off(config.notify_on_status_change)
    ));
    out.push_str(&format!(
        "allow overrides:      {}\n",
        on_off(config.allow_overrides)
    ));

    out.push_str("\nrelease -> backlog item:\n");
    for (release, target) in &config.release_to_backlog {
        out.push_str(&format!("  {:<12} -> {}\n", release.to_string(), target));
    }

    out.push_str("\nrelease -> bug:\n");
    for (release, target) in &config.release_to_bug {
        out.push_str(&format!("  {:<12} -> {}\n", release.to_string(), target));
    }

    out
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
