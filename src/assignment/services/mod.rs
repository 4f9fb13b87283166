//! Application services for role assignment reconciliation and task moves.

mod reassignment;
mod reconciler;
mod status;

pub use reassignment::{
    ReassignRequirementRequest, ReassignmentError, ReassignmentOutcome, ReassignmentService,
};
pub use reconciler::{
    ReconcileConfig, ReconcileError, RoleAssignmentReconciler, UnknownLabelHandling, reconcile,
};
pub use status::{ChangeStatusRequest, StatusChangeOutcome, TaskStatusError, TaskStatusService};
