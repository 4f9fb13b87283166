//! Per-role transition tables and the merged effective policy.

use super::{PolicyDomainError, Role, Status};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Drop table: for each source column, the columns it may be dropped into.
pub type DropTable = BTreeMap<Status, BTreeSet<Status>>;

/// Board permissions declared for a single role.
///
/// Only serialisable: every instance comes from a validating constructor or
/// the built-in catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleTransitionPolicy {
    allowed_statuses: BTreeSet<Status>,
    drag_sources: BTreeSet<Status>,
    drop_targets: DropTable,
}

impl RoleTransitionPolicy {
    /// Creates a validated policy for `role`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyDomainError`] when a drag source, drop source or drop
    /// target falls outside `allowed_statuses`, or when a drop source is not
    /// also a drag source.
    pub fn new(
        role: Role,
        allowed_statuses: BTreeSet<Status>,
        drag_sources: BTreeSet<Status>,
        drop_targets: DropTable,
    ) -> Result<Self, PolicyDomainError> {
        let policy = Self {
            allowed_statuses,
            drag_sources,
            drop_targets,
        };
        policy.validate(role)?;
        Ok(policy)
    }

    /// Policy with no visible columns and no moves.
    #[must_use]
    pub const fn deny_all() -> Self {
        Self {
            allowed_statuses: BTreeSet::new(),
            drag_sources: BTreeSet::new(),
            drop_targets: BTreeMap::new(),
        }
    }

    /// Policy that sees every column but cannot move anything.
    #[must_use]
    pub fn view_only() -> Self {
        Self {
            allowed_statuses: Status::ALL.into_iter().collect(),
            ..Self::deny_all()
        }
    }

    /// Policy that may move any task between any two distinct columns.
    #[must_use]
    pub fn full_access() -> Self {
        Self {
            allowed_statuses: Status::ALL.into_iter().collect(),
            drag_sources: Status::ALL.into_iter().collect(),
            drop_targets: full_drop_table(),
        }
    }

    /// Builds a policy from static slices without validating it.
    ///
    /// Used for the built-in catalogue, whose tables are checked by tests.
    pub(crate) fn from_table(
        allowed: &[Status],
        drag: &[Status],
        drops: &[(Status, &[Status])],
    ) -> Self {
        Self {
            allowed_statuses: allowed.iter().copied().collect(),
            drag_sources: drag.iter().copied().collect(),
            drop_targets: drops
                .iter()
                .map(|(from, targets)| (*from, targets.iter().copied().collect()))
                .collect(),
        }
    }

    /// Checks the policy invariants, reporting the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyDomainError`] describing the violated invariant.
    pub fn validate(&self, role: Role) -> Result<(), PolicyDomainError> {
        if let Some(status) = self
            .drag_sources
            .iter()
            .find(|status| !self.allowed_statuses.contains(*status))
        {
            return Err(PolicyDomainError::DragSourceNotAllowed {
                role,
                status: *status,
            });
        }

        for (from, targets) in &self.drop_targets {
            if !self.allowed_statuses.contains(from) {
                return Err(PolicyDomainError::DropSourceNotAllowed { role, status: *from });
            }
            if !self.drag_sources.contains(from) {
                return Err(PolicyDomainError::DropSourceNotDraggable { role, status: *from });
            }
            if let Some(to) = targets
                .iter()
                .find(|to| !self.allowed_statuses.contains(*to))
            {
                return Err(PolicyDomainError::DropTargetNotAllowed {
                    role,
                    from: *from,
                    to: *to,
                });
            }
        }
        Ok(())
    }

    /// Returns the statuses the role may view and interact with.
    #[must_use]
    pub const fn allowed_statuses(&self) -> &BTreeSet<Status> {
        &self.allowed_statuses
    }

    /// Returns the statuses the role may pick a task up from.
    #[must_use]
    pub const fn drag_sources(&self) -> &BTreeSet<Status> {
        &self.drag_sources
    }

    /// Returns the role's drop table.
    #[must_use]
    pub const fn drop_targets(&self) -> &DropTable {
        &self.drop_targets
    }
}

/// Permissions of one user, merged across every role they hold.
///
/// Computed on demand and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EffectivePolicy {
    allowed_statuses: BTreeSet<Status>,
    drag_sources: BTreeSet<Status>,
    drop_targets: DropTable,
    full_access: bool,
}

impl EffectivePolicy {
    /// Policy granting nothing.
    #[must_use]
    pub const fn deny_all() -> Self {
        Self {
            allowed_statuses: BTreeSet::new(),
            drag_sources: BTreeSet::new(),
            drop_targets: BTreeMap::new(),
            full_access: false,
        }
    }

    /// Unrestricted policy granted by the privileged override.
    #[must_use]
    pub fn full_access() -> Self {
        Self {
            allowed_statuses: Status::ALL.into_iter().collect(),
            drag_sources: Status::ALL.into_iter().collect(),
            drop_targets: full_drop_table(),
            full_access: true,
        }
    }

    /// Unions a role policy into this one.
    pub(crate) fn absorb(&mut self, policy: &RoleTransitionPolicy) {
        self.allowed_statuses
            .extend(policy.allowed_statuses.iter().copied());
        self.drag_sources.extend(policy.drag_sources.iter().copied());
        for (from, targets) in &policy.drop_targets {
            self.drop_targets
                .entry(*from)
                .or_default()
                .extend(targets.iter().copied());
        }
    }

    /// Returns `true` when the privileged override produced this policy.
    #[must_use]
    pub const fn is_full_access(&self) -> bool {
        self.full_access
    }

    /// Returns `true` when the policy permits no interaction at all.
    #[must_use]
    pub fn is_deny_all(&self) -> bool {
        self.allowed_statuses.is_empty() && self.drag_sources.is_empty() && !self.has_any_drop()
    }

    /// Returns the visible statuses.
    #[must_use]
    pub const fn allowed_statuses(&self) -> &BTreeSet<Status> {
        &self.allowed_statuses
    }

    /// Returns the draggable statuses.
    #[must_use]
    pub const fn drag_sources(&self) -> &BTreeSet<Status> {
        &self.drag_sources
    }

    /// Returns the merged drop table.
    #[must_use]
    pub const fn drop_targets(&self) -> &DropTable {
        &self.drop_targets
    }

    /// Returns `true` when tasks in `status` are visible.
    #[must_use]
    pub fn allows_status(&self, status: Status) -> bool {
        self.allowed_statuses.contains(&status)
    }

    /// Returns `true` when tasks may be picked up from `status`.
    #[must_use]
    pub fn can_drag_from(&self, status: Status) -> bool {
        self.drag_sources.contains(&status)
    }

    /// Returns `true` when a task in `from` may be dropped into `to`.
    #[must_use]
    pub fn can_drop(&self, from: Status, to: Status) -> bool {
        self.drop_targets
            .get(&from)
            .is_some_and(|targets| targets.contains(&to))
    }

    /// Iterates the columns a task in `from` may be dropped into.
    pub fn targets_from(&self, from: Status) -> impl Iterator<Item = Status> + '_ {
        self.drop_targets
            .get(&from)
            .into_iter()
            .flat_map(|targets| targets.iter().copied())
    }

    /// Returns `true` when this policy permits everything `other` permits.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        self.allowed_statuses.is_superset(&other.allowed_statuses)
            && self.drag_sources.is_superset(&other.drag_sources)
            && other
                .drop_targets
                .iter()
                .all(|(from, targets)| targets.iter().all(|to| self.can_drop(*from, *to)))
    }

    fn has_any_drop(&self) -> bool {
        self.drop_targets.values().any(|targets| !targets.is_empty())
    }
}

fn full_drop_table() -> DropTable {
    Status::ALL
        .into_iter()
        .map(|from| {
            let targets = Status::ALL.into_iter().filter(|to| *to != from).collect();
            (from, targets)
        })
        .collect()
}
