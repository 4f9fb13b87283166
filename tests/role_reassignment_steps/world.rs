//! Shared world state for role reassignment BDD scenarios.

use std::{collections::BTreeMap, sync::Arc};

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    assignment::{
        adapters::memory::InMemoryRoleTaskStore,
        domain::{AssigneeId, DesiredAssignments, RequirementId, RoleLabel, RoleTask},
        services::{
            ReassignRequirementRequest, ReassignmentOutcome, ReassignmentService,
            TaskStatusService,
        },
    },
    board::{
        domain::{Role, RoleSet},
        services::TaskLifecycleGate,
    },
};

/// Reassignment service type used by the BDD world.
pub type TestReassignment = ReassignmentService<InMemoryRoleTaskStore, DefaultClock>;

/// Status service type used by the BDD world.
pub type TestStatus = TaskStatusService<InMemoryRoleTaskStore, DefaultClock>;

/// Scenario world for role reassignment behaviour tests.
pub struct ReassignmentWorld {
    /// The reassignment service under test.
    pub reassignment: TestReassignment,
    /// Status service used to give tasks progress.
    pub status: TestStatus,
    /// Requirement every step operates on.
    pub requirement: RequirementId,
    /// Desired assignees per label, rebuilt into a request on submit.
    pub desired: BTreeMap<String, Vec<u64>>,
    /// Outcome of the last submitted reassignment.
    pub last_outcome: Option<ReassignmentOutcome>,
}

impl ReassignmentWorld {
    /// Creates a world around a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryRoleTaskStore::new());
        let clock = Arc::new(DefaultClock);
        Self {
            reassignment: ReassignmentService::new(Arc::clone(&store), Arc::clone(&clock)),
            status: TaskStatusService::new(store, clock, TaskLifecycleGate::default()),
            requirement: RequirementId::new(),
            desired: BTreeMap::new(),
            last_outcome: None,
        }
    }

    /// Submits the desired assignments and records the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error when an assignee id is invalid or the reassignment
    /// fails.
    pub fn submit(&mut self) -> Result<(), eyre::Report> {
        let mut desired = DesiredAssignments::new();
        for (label, users) in &self.desired {
            let assignees = users
                .iter()
                .map(|user| AssigneeId::new(*user))
                .collect::<Result<Vec<_>, _>>()?;
            desired.assign(label.as_str(), assignees);
        }
        let request = ReassignRequirementRequest::new(self.requirement, desired);
        let outcome = run_async(self.reassignment.reassign(request))?;
        self.last_outcome = Some(outcome);
        Ok(())
    }

    /// Lists the tasks of `user` under `label`.
    ///
    /// # Errors
    ///
    /// Returns an error when the label or assignee is invalid or listing
    /// fails.
    pub fn tasks_of(&self, user: u64, label: &str) -> Result<Vec<RoleTask>, eyre::Report> {
        let label = RoleLabel::try_from(label)?;
        let assignee = AssigneeId::new(user)?;
        let tasks = run_async(self.reassignment.tasks_for(self.requirement))?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.label() == label && task.assignee() == assignee)
            .collect())
    }
}

impl Default for ReassignmentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReassignmentWorld {
    ReassignmentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Board roles held by someone working under `label`.
#[must_use]
pub fn roles_for(label: RoleLabel) -> RoleSet {
    RoleSet::single(match label {
        RoleLabel::Developer => Role::SoftwareDeveloper,
        RoleLabel::Qc => Role::QcEngineer,
        RoleLabel::Designer => Role::UiUxDesigner,
    })
}
