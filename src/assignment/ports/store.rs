//! Store port for role task records.

use crate::assignment::domain::{AssigneeId, RequirementId, RoleLabel, RoleTask, RoleTaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for role task store operations.
pub type RoleTaskStoreResult<T> = Result<T, RoleTaskStoreError>;

/// Role task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleTaskStore: Send + Sync {
    /// Stores a single new task.
    ///
    /// # Errors
    ///
    /// Returns [`RoleTaskStoreError::DuplicateTask`] when the ID already
    /// exists or [`RoleTaskStoreError::DuplicateAssignment`] when the triple
    /// already has a live task.
    async fn store(&self, task: &RoleTask) -> RoleTaskStoreResult<()>;

    /// Persists status and notes of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`RoleTaskStoreError::NotFound`] when the task does not exist
    /// or [`RoleTaskStoreError::IdentityChanged`] when the requirement, label
    /// or assignee differ from the stored record.
    async fn update(&self, task: &RoleTask) -> RoleTaskStoreResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: RoleTaskId) -> RoleTaskStoreResult<Option<RoleTask>>;

    /// Returns every live task of a requirement.
    async fn list_by_requirement(
        &self,
        requirement_id: RequirementId,
    ) -> RoleTaskStoreResult<Vec<RoleTask>>;

    /// Deletes and creates tasks of one requirement as a single atomic unit.
    ///
    /// Either every deletion and creation is applied or none is.
    ///
    /// # Errors
    ///
    /// Returns [`RoleTaskStoreError::NotFound`] for a missing deletion,
    /// [`RoleTaskStoreError::ForeignRequirement`] when a task belongs to
    /// another requirement, and the duplicate errors when a creation would
    /// break task uniqueness.
    async fn apply_plan(
        &self,
        requirement_id: RequirementId,
        deletions: &[RoleTaskId],
        creations: &[RoleTask],
    ) -> RoleTaskStoreResult<()>;
}

/// Errors returned by role task store implementations.
#[derive(Debug, Clone, Error)]
pub enum RoleTaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate role task identifier: {0}")]
    DuplicateTask(RoleTaskId),

    /// The triple already has a live task.
    #[error("requirement {requirement_id} already has a {label} task for assignee {assignee}")]
    DuplicateAssignment {
        /// Owning requirement.
        requirement_id: RequirementId,
        /// Functional role label.
        label: RoleLabel,
        /// Assignee holding the role.
        assignee: AssigneeId,
    },

    /// The task was not found.
    #[error("role task not found: {0}")]
    NotFound(RoleTaskId),

    /// The task belongs to a different requirement than the operation.
    #[error("role task {task_id} does not belong to requirement {requirement_id}")]
    ForeignRequirement {
        /// Offending task.
        task_id: RoleTaskId,
        /// Requirement the operation targeted.
        requirement_id: RequirementId,
    },

    /// An update tried to change the requirement, label or assignee.
    #[error("role task {0} identity fields are immutable")]
    IdentityChanged(RoleTaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RoleTaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
