//! Desired end state of a requirement's role assignments.

use super::{AssigneeId, RoleLabel};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Assignees requested for each role label, supplied wholesale on every
/// requirement edit.
///
/// Labels are kept as raw strings until reconciliation so that an
/// unrecognized label can be rejected on its own. A label that is absent or
/// maps to an empty set means nobody should hold that role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesiredAssignments(BTreeMap<String, BTreeSet<AssigneeId>>);

impl DesiredAssignments {
    /// Creates an empty assignment map: every role is unassigned.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds assignees under `label`, merging with any already present.
    #[must_use]
    pub fn with(
        mut self,
        label: impl Into<String>,
        assignees: impl IntoIterator<Item = AssigneeId>,
    ) -> Self {
        self.assign(label, assignees);
        self
    }

    /// Adds assignees under `label`, merging with any already present.
    pub fn assign(
        &mut self,
        label: impl Into<String>,
        assignees: impl IntoIterator<Item = AssigneeId>,
    ) {
        self.0.entry(label.into()).or_default().extend(assignees);
    }

    /// Adds assignees under a recognized label.
    #[must_use]
    pub fn with_label(
        self,
        label: RoleLabel,
        assignees: impl IntoIterator<Item = AssigneeId>,
    ) -> Self {
        self.with(label.as_str(), assignees)
    }

    /// Iterates raw labels and their assignees.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &BTreeSet<AssigneeId>)> {
        self.0
            .iter()
            .map(|(label, assignees)| (label.as_str(), assignees))
    }

    /// Returns `true` when no label was supplied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(RoleLabel, AssigneeId)> for DesiredAssignments {
    fn from_iter<T: IntoIterator<Item = (RoleLabel, AssigneeId)>>(iter: T) -> Self {
        let mut desired = Self::new();
        for (label, assignee) in iter {
            desired.assign(label.as_str(), [assignee]);
        }
        desired
    }
}
