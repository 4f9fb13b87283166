//! Domain model for requirement role assignments.
//!
//! A requirement is staffed per [`RoleLabel`]; each assignee of a label owns
//! an independent [`RoleTask`] with its own status history.

mod desired;
mod error;
mod ids;
mod plan;
mod role_label;
mod role_task;

pub use desired::DesiredAssignments;
pub use error::{AssignmentDomainError, ParseRoleLabelError, UnknownRoleLabel};
pub use ids::{AssigneeId, RequirementId, RoleTaskId};
pub use plan::{PlannedAssignment, ReconciliationPlan};
pub use role_label::RoleLabel;
pub use role_task::{PersistedRoleTaskData, RoleTask};
