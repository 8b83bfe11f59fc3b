// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cascade propagator: computes update intents for entities linked to a
//! release whose status changed.
//!
//! [`propagate`] is a pure function of its inputs. It emits intents; it
//! never applies them. The caller owns the writes and any transactional
//! guarantee across entities (apply with optimistic concurrency control or
//! accept last-write-wins).
//!
//! The linked entity list is flat: collecting bugs transitively through
//! backlog items' related-bug references is the caller's repository's job.

use serde::{Deserialize, Serialize};

use crate::config::SyncConfig;
use crate::error::Result;
use crate::guard::{self, SkipReason, Verdict};
use crate::status::{BacklogStatus, BugStatus, EntityKind, ReleaseStatus};

/// A caller-supplied reference to an entity linked to the release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkedEntity {
    /// A backlog item contained in the release.
    BacklogItem { id: String, status: BacklogStatus },
    /// A bug linked to the release through its backlog items.
    Bug { id: String, status: BugStatus },
}

impl LinkedEntity {
    /// The entity's identifier.
    pub fn id(&self) -> &str {
        match self {
            LinkedEntity::BacklogItem { id, .. } | LinkedEntity::Bug { id, .. } => id,
        }
    }

    /// Which target domain this entity belongs to.
    pub fn kind(&self) -> EntityKind {
        match self {
            LinkedEntity::BacklogItem { .. } => EntityKind::BacklogItem,
            LinkedEntity::Bug { .. } => EntityKind::Bug,
        }
    }
}

/// An intended status write, to be applied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusUpdateIntent {
    BacklogItem {
        id: String,
        from: BacklogStatus,
        to: BacklogStatus,
    },
    Bug {
        id: String,
        from: BugStatus,
        to: BugStatus,
    },
}

impl StatusUpdateIntent {
    /// The target entity's identifier.
    pub fn id(&self) -> &str {
        match self {
            StatusUpdateIntent::BacklogItem { id, .. } | StatusUpdateIntent::Bug { id, .. } => id,
        }
    }

    /// Which target domain the write belongs to.
    pub fn kind(&self) -> EntityKind {
        match self {
            StatusUpdateIntent::BacklogItem { .. } => EntityKind::BacklogItem,
            StatusUpdateIntent::Bug { .. } => EntityKind::Bug,
        }
    }
}

/// A notification to be dispatched by the caller's delivery channels.
/// Old/new values are carried as display strings, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationIntent {
    /// The entity whose status changed.
    pub entity_id: String,
    /// Which target domain the entity belongs to.
    pub kind: EntityKind,
    /// Status before the cascade.
    pub old_value: String,
    /// Status after the cascade.
    pub new_value: String,
}

/// An entity the cascade left untouched, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedEntity {
    pub id: String,
    pub kind: EntityKind,
    pub reason: SkipReason,
}

/// Everything a release status change implies for its linked entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeOutcome {
    /// The release whose status changed.
    pub release_id: String,
    /// The release's new status.
    pub release_status: ReleaseStatus,
    /// Status writes for the caller to apply.
    pub updates: Vec<StatusUpdateIntent>,
    /// Notifications for the caller to dispatch. Empty unless
    /// `notify_on_status_change` is set.
    pub notifications: Vec<NotificationIntent>,
    /// Entities left untouched, with reasons the caller can surface.
    pub skipped: Vec<SkippedEntity>,
}

impl CascadeOutcome {
    fn new(release_id: &str, release_status: ReleaseStatus) -> Self {
        CascadeOutcome {
            release_id: release_id.to_string(),
            release_status,
            updates: Vec::new(),
            notifications: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Returns true if the cascade produced no work for the caller.
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.notifications.is_empty()
    }
}

/// Computes the cascade for a release status change over its linked
/// entities.
///
/// Disabled cascading is a no-op outcome, not an error; the only failure
/// mode is a mapping table with a gap, which invalidates the whole
/// configuration and aborts the cascade.
pub fn propagate(
    release_id: &str,
    new_status: ReleaseStatus,
    linked: &[LinkedEntity],
    config: &SyncConfig,
) -> Result<CascadeOutcome> {
    let mut outcome = CascadeOutcome::new(release_id, new_status);

    if !config.enable_cascading_updates {
        for entity in linked {
            outcome.skipped.push(SkippedEntity {
                id: entity.id().to_string(),
                kind: entity.kind(),
                reason: SkipReason::CascadingDisabled,
            });
        }
        return Ok(outcome);
    }

    for entity in linked {
        match entity {
            LinkedEntity::BacklogItem { id, status } => {
                let candidate = config.backlog_target(new_status)?;
                match guard::backlog_verdict(*status, candidate, config) {
                    Verdict::Allow => {
                        outcome.updates.push(StatusUpdateIntent::BacklogItem {
                            id: id.clone(),
                            from: *status,
                            to: candidate,
                        });
                        if config.notify_on_status_change {
                            outcome.notifications.push(NotificationIntent {
                                entity_id: id.clone(),
                                kind: EntityKind::BacklogItem,
                                old_value: status.to_string(),
                                new_value: candidate.to_string(),
                            });
                        }
                    }
                    Verdict::Skip(reason) => outcome.skipped.push(SkippedEntity {
                        id: id.clone(),
                        kind: EntityKind::BacklogItem,
                        reason,
                    }),
                }
            }
            LinkedEntity::Bug { id, status } => {
                let candidate = config.bug_target(new_status)?;
                match guard::bug_verdict(*status, candidate, config) {
                    Verdict::Allow => {
                        outcome.updates.push(StatusUpdateIntent::Bug {
                            id: id.clone(),
                            from: *status,
                            to: candidate,
                        });
                        if config.notify_on_status_change {
                            outcome.notifications.push(NotificationIntent {
                                entity_id: id.clone(),
                                kind: EntityKind::Bug,
                                old_value: status.to_string(),
                                new_value: candidate.to_string(),
                            });
                        }
                    }
                    Verdict::Skip(reason) => outcome.skipped.push(SkippedEntity {
                        id: id.clone(),
                        kind: EntityKind::Bug,
                        reason,
                    }),
                }
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
#[path = "cascade_tests.rs"]
mod tests;
