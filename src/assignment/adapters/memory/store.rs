//! In-memory role task store for tests and embedded use.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::assignment::{
    domain::{AssigneeId, RequirementId, RoleLabel, RoleTask, RoleTaskId},
    ports::{RoleTaskStore, RoleTaskStoreError, RoleTaskStoreResult},
};

type AssignmentKey = (RequirementId, RoleLabel, AssigneeId);

/// Thread-safe in-memory role task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoleTaskStore {
    state: Arc<RwLock<InMemoryRoleTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryRoleTaskState {
    tasks: HashMap<RoleTaskId, RoleTask>,
    assignment_index: HashMap<AssignmentKey, RoleTaskId>,
}

impl InMemoryRoleTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn assignment_key(task: &RoleTask) -> AssignmentKey {
    (task.requirement_id(), task.label(), task.assignee())
}

fn duplicate_assignment(key: AssignmentKey) -> RoleTaskStoreError {
    let (requirement_id, label, assignee) = key;
    RoleTaskStoreError::DuplicateAssignment {
        requirement_id,
        label,
        assignee,
    }
}

fn lock_error(err: impl std::fmt::Display) -> RoleTaskStoreError {
    RoleTaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl InMemoryRoleTaskState {
    fn insert(&mut self, task: &RoleTask) {
        self.assignment_index.insert(assignment_key(task), task.id());
        self.tasks.insert(task.id(), task.clone());
    }

    fn remove(&mut self, id: RoleTaskId) {
        if let Some(task) = self.tasks.remove(&id) {
            self.assignment_index.remove(&assignment_key(&task));
        }
    }

    /// Checks a plan against the current state without mutating anything.
    fn check_plan(
        &self,
        requirement_id: RequirementId,
        deletions: &[RoleTaskId],
        creations: &[RoleTask],
    ) -> RoleTaskStoreResult<()> {
        let mut freed = HashSet::new();
        for id in deletions {
            let task = self
                .tasks
                .get(id)
                .ok_or(RoleTaskStoreError::NotFound(*id))?;
            if task.requirement_id() != requirement_id {
                return Err(RoleTaskStoreError::ForeignRequirement {
                    task_id: *id,
                    requirement_id,
                });
            }
            freed.insert(assignment_key(task));
        }

        let mut claimed = HashSet::new();
        for task in creations {
            if task.requirement_id() != requirement_id {
                return Err(RoleTaskStoreError::ForeignRequirement {
                    task_id: task.id(),
                    requirement_id,
                });
            }
            if self.tasks.contains_key(&task.id()) {
                return Err(RoleTaskStoreError::DuplicateTask(task.id()));
            }
            let key = assignment_key(task);
            let still_live = self.assignment_index.contains_key(&key) && !freed.contains(&key);
            if still_live || !claimed.insert(key) {
                return Err(duplicate_assignment(key));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl RoleTaskStore for InMemoryRoleTaskStore {
    async fn store(&self, task: &RoleTask) -> RoleTaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(RoleTaskStoreError::DuplicateTask(task.id()));
        }
        let key = assignment_key(task);
        if state.assignment_index.contains_key(&key) {
            return Err(duplicate_assignment(key));
        }
        state.insert(task);
        Ok(())
    }

    async fn update(&self, task: &RoleTask) -> RoleTaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let existing = state
            .tasks
            .get(&task.id())
            .ok_or(RoleTaskStoreError::NotFound(task.id()))?;
        if !existing.same_identity(task) {
            return Err(RoleTaskStoreError::IdentityChanged(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: RoleTaskId) -> RoleTaskStoreResult<Option<RoleTask>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_by_requirement(
        &self,
        requirement_id: RequirementId,
    ) -> RoleTaskStoreResult<Vec<RoleTask>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut tasks: Vec<RoleTask> = state
            .tasks
            .values()
            .filter(|task| task.requirement_id() == requirement_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|task| (task.created_at(), task.label(), task.assignee()));
        Ok(tasks)
    }

    async fn apply_plan(
        &self,
        requirement_id: RequirementId,
        deletions: &[RoleTaskId],
        creations: &[RoleTask],
    ) -> RoleTaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.check_plan(requirement_id, deletions, creations)?;

        for id in deletions {
            state.remove(*id);
        }
        for task in creations {
            state.insert(task);
        }
        Ok(())
    }
}
