//! Shared world state for board transition BDD scenarios.

use rstest::fixture;
use taskboard::board::{domain::RoleSet, services::TaskLifecycleGate};

/// Scenario world for board transition behaviour tests.
#[derive(Default)]
pub struct BoardWorld {
    /// Gate under test.
    pub gate: TaskLifecycleGate,
    /// Roles held by the scenario user.
    pub roles: RoleSet,
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
