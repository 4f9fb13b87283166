//! Role task aggregate.

use super::{AssigneeId, RequirementId, RoleLabel, RoleTaskId};
use crate::board::domain::Status;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task record scoped to one (requirement, role label, assignee) triple.
///
/// Identity fields are fixed at creation. Only the board status and the
/// notes change afterwards; a different assignee always gets a new task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTask {
    id: RoleTaskId,
    requirement_id: RequirementId,
    label: RoleLabel,
    assignee: AssigneeId,
    status: Status,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted role task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRoleTaskData {
    /// Persisted task identifier.
    pub id: RoleTaskId,
    /// Owning requirement.
    pub requirement_id: RequirementId,
    /// Functional role the task covers.
    pub label: RoleLabel,
    /// User holding the role.
    pub assignee: AssigneeId,
    /// Persisted board status.
    pub status: Status,
    /// Persisted notes, if any.
    pub notes: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl RoleTask {
    /// Creates a new task in [`Status::ToDo`].
    #[must_use]
    pub fn new(
        requirement_id: RequirementId,
        label: RoleLabel,
        assignee: AssigneeId,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: RoleTaskId::new(),
            requirement_id,
            label,
            assignee,
            status: Status::ToDo,
            notes: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedRoleTaskData) -> Self {
        Self {
            id: data.id,
            requirement_id: data.requirement_id,
            label: data.label,
            assignee: data.assignee,
            status: data.status,
            notes: data.notes,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> RoleTaskId {
        self.id
    }

    /// Returns the owning requirement.
    #[must_use]
    pub const fn requirement_id(&self) -> RequirementId {
        self.requirement_id
    }

    /// Returns the functional role label.
    #[must_use]
    pub const fn label(&self) -> RoleLabel {
        self.label
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee(&self) -> AssigneeId {
        self.assignee
    }

    /// Returns the board status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when both records describe the same triple under the
    /// same identifier.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.id == other.id
            && self.requirement_id == other.requirement_id
            && self.label == other.label
            && self.assignee == other.assignee
    }

    /// Moves the task to another board column.
    ///
    /// Legality is decided by the board gate before this is called.
    pub fn move_to(&mut self, status: Status, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Replaces the task notes.
    pub fn set_notes(&mut self, notes: Option<String>, clock: &impl Clock) {
        self.notes = notes;
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
