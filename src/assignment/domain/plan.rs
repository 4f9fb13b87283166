//! Reconciliation plans produced on assignee changes.

use super::{AssigneeId, RequirementId, RoleLabel, RoleTask, RoleTaskId, UnknownRoleLabel};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Role task that must be created for a newly added assignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlannedAssignment {
    /// Functional role of the new task.
    pub label: RoleLabel,
    /// Assignee of the new task.
    pub assignee: AssigneeId,
}

/// Deletions, creations and untouched tasks for one requirement.
///
/// A plan is only a description. The caller applies deletions and creations
/// together as one atomic unit; applying only part of it can leave a role
/// with nobody assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationPlan {
    requirement_id: RequirementId,
    to_delete: Vec<RoleTaskId>,
    to_create: Vec<PlannedAssignment>,
    unchanged: Vec<RoleTaskId>,
    rejected_labels: Vec<UnknownRoleLabel>,
}

impl ReconciliationPlan {
    /// Creates an empty plan for `requirement_id`.
    #[must_use]
    pub const fn empty(requirement_id: RequirementId) -> Self {
        Self {
            requirement_id,
            to_delete: Vec::new(),
            to_create: Vec::new(),
            unchanged: Vec::new(),
            rejected_labels: Vec::new(),
        }
    }

    pub(crate) fn delete(&mut self, id: RoleTaskId) {
        self.to_delete.push(id);
    }

    pub(crate) fn create(&mut self, label: RoleLabel, assignee: AssigneeId) {
        self.to_create.push(PlannedAssignment { label, assignee });
    }

    pub(crate) fn keep(&mut self, id: RoleTaskId) {
        self.unchanged.push(id);
    }

    pub(crate) fn reject(&mut self, label: UnknownRoleLabel) {
        self.rejected_labels.push(label);
    }

    /// Returns the requirement the plan applies to.
    #[must_use]
    pub const fn requirement_id(&self) -> RequirementId {
        self.requirement_id
    }

    /// Returns the tasks whose assignee was removed or replaced.
    #[must_use]
    pub fn to_delete(&self) -> &[RoleTaskId] {
        &self.to_delete
    }

    /// Returns the assignments that need a new task.
    #[must_use]
    pub fn to_create(&self) -> &[PlannedAssignment] {
        &self.to_create
    }

    /// Returns the tasks whose assignee is still wanted.
    #[must_use]
    pub fn unchanged(&self) -> &[RoleTaskId] {
        &self.unchanged
    }

    /// Returns the labels left out of the plan because they were not
    /// recognized.
    #[must_use]
    pub fn rejected_labels(&self) -> &[UnknownRoleLabel] {
        &self.rejected_labels
    }

    /// Returns `true` when applying the plan would write nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.to_delete.is_empty() && self.to_create.is_empty()
    }

    /// Builds fresh tasks for every planned creation.
    #[must_use]
    pub fn instantiate(&self, clock: &impl Clock) -> Vec<RoleTask> {
        self.to_create
            .iter()
            .map(|planned| {
                RoleTask::new(self.requirement_id, planned.label, planned.assignee, clock)
            })
            .collect()
    }

    /// Returns the task set that results from applying the plan to `current`.
    #[must_use]
    pub fn project(&self, current: &[RoleTask], clock: &impl Clock) -> Vec<RoleTask> {
        let deleted: HashSet<RoleTaskId> = self.to_delete.iter().copied().collect();
        current
            .iter()
            .filter(|task| !deleted.contains(&task.id()))
            .cloned()
            .chain(self.instantiate(clock))
            .collect()
    }
}
