//! Built-in board policies, one per role.
//!
//! Tables are built on first use and never mutated afterwards.

use super::{Role, RoleTransitionPolicy, Status};
use std::sync::LazyLock;

use Status::{Completed, InProgress, InReview, Rework, ToDo};

static SOFTWARE_DEVELOPER: LazyLock<RoleTransitionPolicy> = LazyLock::new(|| {
    RoleTransitionPolicy::from_table(
        &[ToDo, InProgress, InReview, Rework],
        &[ToDo, InProgress, Rework],
        &[
            (ToDo, &[InProgress]),
            (InProgress, &[ToDo, InReview]),
            (Rework, &[InProgress]),
        ],
    )
});

static QC_ENGINEER: LazyLock<RoleTransitionPolicy> = LazyLock::new(|| {
    RoleTransitionPolicy::from_table(
        &[InReview, Rework, Completed],
        &[InReview, Completed],
        &[(InReview, &[Rework, Completed]), (Completed, &[Rework])],
    )
});

// Design work skips formal review and may be reopened once completed.
static UI_UX_DESIGNER: LazyLock<RoleTransitionPolicy> = LazyLock::new(|| {
    RoleTransitionPolicy::from_table(
        &[ToDo, InProgress, Completed],
        &[ToDo, InProgress, Completed],
        &[
            (ToDo, &[InProgress]),
            (InProgress, &[ToDo, Completed]),
            (Completed, &[InProgress]),
        ],
    )
});

static BUSINESS_ANALYST: LazyLock<RoleTransitionPolicy> = LazyLock::new(|| {
    RoleTransitionPolicy::from_table(
        &[ToDo, InProgress, InReview, Completed],
        &[ToDo, InProgress],
        &[(ToDo, &[InProgress]), (InProgress, &[Completed])],
    )
});

static STAKEHOLDER: LazyLock<RoleTransitionPolicy> = LazyLock::new(RoleTransitionPolicy::view_only);

static PRIVILEGED: LazyLock<RoleTransitionPolicy> =
    LazyLock::new(RoleTransitionPolicy::full_access);

/// Returns the built-in policy for `role`.
#[must_use]
pub fn policy_for(role: Role) -> &'static RoleTransitionPolicy {
    match role {
        Role::SoftwareDeveloper => &*SOFTWARE_DEVELOPER,
        Role::QcEngineer => &*QC_ENGINEER,
        Role::UiUxDesigner => &*UI_UX_DESIGNER,
        Role::BusinessAnalyst => &*BUSINESS_ANALYST,
        Role::Stakeholder => &*STAKEHOLDER,
        Role::ProjectManager
        | Role::ProductManager
        | Role::DeliveryManager
        | Role::Administrator => &*PRIVILEGED,
    }
}
