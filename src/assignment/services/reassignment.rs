//! Service applying requirement reassignments to the role task store.

use super::{ReconcileConfig, ReconcileError, RoleAssignmentReconciler};
use crate::assignment::{
    domain::{DesiredAssignments, ReconciliationPlan, RequirementId, RoleTask},
    ports::{RoleTaskStore, RoleTaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for replacing a requirement's role assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignRequirementRequest {
    requirement_id: RequirementId,
    assignments: DesiredAssignments,
}

impl ReassignRequirementRequest {
    /// Creates a request carrying the full desired assignment state.
    #[must_use]
    pub const fn new(requirement_id: RequirementId, assignments: DesiredAssignments) -> Self {
        Self {
            requirement_id,
            assignments,
        }
    }
}

/// Result of an applied reassignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignmentOutcome {
    /// Plan that was applied.
    pub plan: ReconciliationPlan,
    /// Tasks created for newly added assignees.
    pub created: Vec<RoleTask>,
}

/// Service-level errors for reassignment.
#[derive(Debug, Error)]
pub enum ReassignmentError {
    /// No plan could be produced.
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
    /// Store operation failed.
    #[error(transparent)]
    Repository(#[from] RoleTaskStoreError),
}

/// Result type for reassignment service operations.
pub type ReassignmentResult<T> = Result<T, ReassignmentError>;

/// Orchestrates reconciliation of requirement assignees against the store.
#[derive(Clone)]
pub struct ReassignmentService<S, C>
where
    S: RoleTaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    reconciler: RoleAssignmentReconciler,
}

impl<S, C> ReassignmentService<S, C>
where
    S: RoleTaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a service using the default reconciliation configuration.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            reconciler: RoleAssignmentReconciler::default(),
        }
    }

    /// Replaces the reconciliation configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReconcileConfig) -> Self {
        self.reconciler = RoleAssignmentReconciler::new(config);
        self
    }

    /// Reconciles a requirement's role tasks with the requested assignees.
    ///
    /// Deletions and creations are handed to the store as one atomic unit.
    /// A plan with nothing to write is returned without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`ReassignmentError::Reconcile`] when no plan can be produced
    /// and [`ReassignmentError::Repository`] when listing or applying fails;
    /// in the latter case nothing was written.
    pub async fn reassign(
        &self,
        request: ReassignRequirementRequest,
    ) -> ReassignmentResult<ReassignmentOutcome> {
        let ReassignRequirementRequest {
            requirement_id,
            assignments,
        } = request;

        let current = self.store.list_by_requirement(requirement_id).await?;
        let plan = self
            .reconciler
            .reconcile(requirement_id, &assignments, &current)?;

        if plan.is_noop() {
            debug!(requirement = %requirement_id, "role assignments unchanged");
            return Ok(ReassignmentOutcome {
                plan,
                created: Vec::new(),
            });
        }

        let created = plan.instantiate(&*self.clock);
        self.store
            .apply_plan(requirement_id, plan.to_delete(), &created)
            .await?;

        info!(
            requirement = %requirement_id,
            deleted = plan.to_delete().len(),
            created = created.len(),
            unchanged = plan.unchanged().len(),
            "applied role reassignment"
        );
        Ok(ReassignmentOutcome { plan, created })
    }

    /// Returns the live role tasks of a requirement.
    ///
    /// # Errors
    ///
    /// Returns [`ReassignmentError::Repository`] when the lookup fails.
    pub async fn tasks_for(&self, requirement_id: RequirementId) -> ReassignmentResult<Vec<RoleTask>> {
        Ok(self.store.list_by_requirement(requirement_id).await?)
    }
}
