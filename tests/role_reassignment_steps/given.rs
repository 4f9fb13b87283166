//! Given steps for role reassignment BDD scenarios.

use super::world::{ReassignmentWorld, roles_for, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::assignment::{
    domain::{AssigneeId, RoleLabel},
    services::{ChangeStatusRequest, StatusChangeOutcome},
};

#[given(r#"a requirement with "{label}" assigned to user {user:u64}"#)]
fn requirement_with(
    world: &mut ReassignmentWorld,
    label: String,
    user: u64,
) -> Result<(), eyre::Report> {
    world.desired.entry(label).or_default().push(user);
    world.submit().wrap_err("seed requirement assignments")
}

#[given(r#"the requirement also has "{label}" assigned to user {user:u64}"#)]
fn requirement_also_has(
    world: &mut ReassignmentWorld,
    label: String,
    user: u64,
) -> Result<(), eyre::Report> {
    requirement_with(world, label, user)
}

#[given(r#"user {user:u64} has moved their "{label}" task to "{status}""#)]
fn user_moved_task(
    world: &mut ReassignmentWorld,
    user: u64,
    label: String,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world
        .tasks_of(user, &label)?
        .into_iter()
        .next()
        .ok_or_else(|| eyre::eyre!("user {user} holds no {label} task"))?;
    let request = ChangeStatusRequest::new(
        task.id(),
        AssigneeId::new(user)?,
        roles_for(RoleLabel::try_from(label.as_str())?),
        status,
    );
    match run_async(world.status.change_status(request))? {
        StatusChangeOutcome::Applied(_) => Ok(()),
        StatusChangeOutcome::Denied(reason) => Err(eyre::eyre!("move refused: {reason}")),
    }
}
