//! Then steps for role reassignment BDD scenarios.

use super::world::ReassignmentWorld;
use rstest_bdd_macros::then;
use taskboard::board::domain::Status;

#[then(r#"user {user:u64} holds a "{label}" task in "{status}""#)]
fn user_holds_task(
    world: &ReassignmentWorld,
    user: u64,
    label: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = Status::try_from(status.as_str())?;
    let tasks = world.tasks_of(user, &label)?;
    let [task] = tasks.as_slice() else {
        return Err(eyre::eyre!(
            "expected one {label} task for user {user}, found {}",
            tasks.len()
        ));
    };
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected {label} task in {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"user {user:u64} holds no "{label}" task"#)]
fn user_holds_no_task(
    world: &ReassignmentWorld,
    user: u64,
    label: String,
) -> Result<(), eyre::Report> {
    let tasks = world.tasks_of(user, &label)?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!(
            "expected no {label} task for user {user}, found {}",
            tasks.len()
        ));
    }
    Ok(())
}

#[then("the plan deletes {deleted:usize} tasks and creates {created:usize} tasks")]
fn plan_counts(
    world: &ReassignmentWorld,
    deleted: usize,
    created: usize,
) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no reassignment was submitted"))?;
    let plan = &outcome.plan;
    if plan.to_delete().len() != deleted || plan.to_create().len() != created {
        return Err(eyre::eyre!(
            "expected {deleted} deletions and {created} creations, got {} and {}",
            plan.to_delete().len(),
            plan.to_create().len()
        ));
    }
    Ok(())
}
