//! Authorization of board drag/drop moves.

use super::{BoardLayout, PolicyMerger};
use crate::board::domain::{EffectivePolicy, RoleSet, Status};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a board move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// The task's current column is not visible to the user.
    NotAccessible,
    /// The user may not pick tasks up from the current column.
    CannotDragFrom,
    /// The target column is not a legal drop for the current column.
    CannotDropTo,
    /// The user may not change this particular task.
    CannotModify,
}

impl DenialReason {
    /// Returns the stable reason code shown to clients.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotAccessible => "not_accessible",
            Self::CannotDragFrom => "cannot_drag_from",
            Self::CannotDropTo => "cannot_drop_to",
            Self::CannotModify => "cannot_modify",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of evaluating a requested move.
///
/// A denial is an ordinary decision, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "reason", rename_all = "snake_case")]
pub enum TransitionDecision {
    /// The move may be applied.
    Allowed,
    /// The move is refused for the given reason.
    Denied(DenialReason),
}

impl TransitionDecision {
    /// Returns `true` for [`TransitionDecision::Allowed`].
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns the denial reason, if any.
    #[must_use]
    pub const fn denial_reason(self) -> Option<DenialReason> {
        match self {
            Self::Allowed => None,
            Self::Denied(reason) => Some(reason),
        }
    }
}

/// Decision function used by the board for drag/drop requests.
///
/// Everything not explicitly declared by one of the user's role policies is
/// denied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskLifecycleGate {
    merger: PolicyMerger,
}

impl TaskLifecycleGate {
    /// Creates a gate over the given merger.
    #[must_use]
    pub const fn new(merger: PolicyMerger) -> Self {
        Self { merger }
    }

    /// Returns the effective policy the gate decides with.
    #[must_use]
    pub fn policy(&self, roles: &RoleSet) -> EffectivePolicy {
        self.merger.resolve(roles)
    }

    /// Returns `true` when tasks in `status` may be picked up.
    #[must_use]
    pub fn can_drag_from(&self, roles: &RoleSet, status: Status) -> bool {
        self.policy(roles).can_drag_from(status)
    }

    /// Returns `true` when a task in `from` may be moved to `to`.
    #[must_use]
    pub fn can_transition(&self, roles: &RoleSet, from: Status, to: Status) -> bool {
        self.policy(roles).can_drop(from, to)
    }

    /// Evaluates a move and reports why it is refused.
    #[must_use]
    pub fn evaluate(&self, roles: &RoleSet, from: Status, to: Status) -> TransitionDecision {
        Self::evaluate_with(&self.policy(roles), from, to)
    }

    /// Evaluates a move against an already resolved policy.
    #[must_use]
    pub fn evaluate_with(policy: &EffectivePolicy, from: Status, to: Status) -> TransitionDecision {
        if !policy.allows_status(from) {
            return TransitionDecision::Denied(DenialReason::NotAccessible);
        }
        if !policy.can_drag_from(from) {
            return TransitionDecision::Denied(DenialReason::CannotDragFrom);
        }
        if !policy.can_drop(from, to) {
            return TransitionDecision::Denied(DenialReason::CannotDropTo);
        }
        TransitionDecision::Allowed
    }

    /// Describes which columns the user sees and which moves the board
    /// should enable.
    #[must_use]
    pub fn board_layout(&self, roles: &RoleSet) -> BoardLayout {
        BoardLayout::from_policy(&self.policy(roles))
    }
}

/// Returns `true` when `roles` may move a task from `from` to `to`, using the
/// default configuration.
#[must_use]
pub fn can_transition(roles: &RoleSet, from: Status, to: Status) -> bool {
    TaskLifecycleGate::default().can_transition(roles, from, to)
}

/// Returns `true` when `roles` may pick tasks up from `status`, using the
/// default configuration.
#[must_use]
pub fn can_drag_from(roles: &RoleSet, status: Status) -> bool {
    TaskLifecycleGate::default().can_drag_from(roles, status)
}
