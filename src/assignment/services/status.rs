//! Service moving role tasks between board columns.

use crate::{
    assignment::{
        domain::{AssigneeId, RoleTask, RoleTaskId},
        ports::{RoleTaskStore, RoleTaskStoreError},
    },
    board::{
        domain::{ParseStatusError, RoleSet, Status},
        services::{DenialReason, TaskLifecycleGate, TransitionDecision},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for a board drag/drop on a role task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStatusRequest {
    task_id: RoleTaskId,
    actor: AssigneeId,
    roles: RoleSet,
    target: String,
}

impl ChangeStatusRequest {
    /// Creates a request for `actor`, holding `roles`, to move a task to the
    /// `target` column.
    #[must_use]
    pub fn new(
        task_id: RoleTaskId,
        actor: AssigneeId,
        roles: RoleSet,
        target: impl Into<String>,
    ) -> Self {
        Self {
            task_id,
            actor,
            roles,
            target: target.into(),
        }
    }
}

/// Result of a status change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChangeOutcome {
    /// The task moved and was persisted.
    Applied(RoleTask),
    /// The move was refused; nothing was written.
    Denied(DenialReason),
}

/// Service-level errors for status changes.
#[derive(Debug, Error)]
pub enum TaskStatusError {
    /// The target status string is not a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseStatusError),
    /// The task does not exist.
    #[error("role task not found: {0}")]
    NotFound(RoleTaskId),
    /// Store operation failed.
    #[error(transparent)]
    Repository(#[from] RoleTaskStoreError),
}

/// Result type for status change operations.
pub type TaskStatusResult<T> = Result<T, TaskStatusError>;

/// Applies gated board moves to stored role tasks.
#[derive(Clone)]
pub struct TaskStatusService<S, C>
where
    S: RoleTaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    gate: TaskLifecycleGate,
}

impl<S, C> TaskStatusService<S, C>
where
    S: RoleTaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new status service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>, gate: TaskLifecycleGate) -> Self {
        Self { store, clock, gate }
    }

    /// Moves a task to the requested column when the actor may do so.
    ///
    /// Only the assignee may move a task unless the actor has full board
    /// access. A refused move is returned as [`StatusChangeOutcome::Denied`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatusError::InvalidStatus`] for an unknown target,
    /// [`TaskStatusError::NotFound`] for a missing task and
    /// [`TaskStatusError::Repository`] when persistence fails.
    pub async fn change_status(
        &self,
        request: ChangeStatusRequest,
    ) -> TaskStatusResult<StatusChangeOutcome> {
        let ChangeStatusRequest {
            task_id,
            actor,
            roles,
            target,
        } = request;
        let target_status = Status::try_from(target.as_str())?;

        let mut task = self
            .store
            .find_by_id(task_id)
            .await?
            .ok_or(TaskStatusError::NotFound(task_id))?;

        let policy = self.gate.policy(&roles);
        if !policy.is_full_access() && task.assignee() != actor {
            debug!(task = %task_id, actor = %actor, "actor does not own task");
            return Ok(StatusChangeOutcome::Denied(DenialReason::CannotModify));
        }

        let from = task.status();
        if let TransitionDecision::Denied(reason) =
            TaskLifecycleGate::evaluate_with(&policy, from, target_status)
        {
            debug!(task = %task_id, %from, to = %target_status, %reason, "status change denied");
            return Ok(StatusChangeOutcome::Denied(reason));
        }

        task.move_to(target_status, &*self.clock);
        self.store.update(&task).await?;
        info!(task = %task_id, %from, to = %target_status, "moved role task");
        Ok(StatusChangeOutcome::Applied(task))
    }
}
