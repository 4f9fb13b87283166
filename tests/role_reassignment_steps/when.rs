//! When steps for role reassignment BDD scenarios.

use super::world::ReassignmentWorld;
use rstest_bdd_macros::when;

#[when(r#"the "{label}" assignment is set to user {user:u64}"#)]
fn assignment_set(world: &mut ReassignmentWorld, label: String, user: u64) {
    world.desired.insert(label, vec![user]);
}

#[when(r#"the "{label}" assignment is cleared"#)]
fn assignment_cleared(world: &mut ReassignmentWorld, label: String) {
    world.desired.insert(label, Vec::new());
}

#[when("the reassignment is submitted")]
fn reassignment_submitted(world: &mut ReassignmentWorld) -> Result<(), eyre::Report> {
    world.submit()
}
