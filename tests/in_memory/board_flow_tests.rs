//! Integration tests for gated moves across the review cycle.

use super::helpers::{Harness, assignee, harness, submit, task_of};
use rstest::rstest;
use taskboard::{
    assignment::{
        domain::{DesiredAssignments, RequirementId, RoleLabel, RoleTaskId},
        services::{ChangeStatusRequest, StatusChangeOutcome},
    },
    board::{
        domain::{Role, RoleSet, Status},
        services::DenialReason,
    },
};

async fn move_task(
    harness: &Harness,
    task: RoleTaskId,
    actor: u64,
    role: Role,
    target: &str,
) -> eyre::Result<StatusChangeOutcome> {
    Ok(harness
        .status
        .change_status(ChangeStatusRequest::new(
            task,
            assignee(actor),
            RoleSet::single(role),
            target,
        ))
        .await?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn developer_then_qc_walk_the_review_cycle(harness: Harness) -> eyre::Result<()> {
    let requirement = RequirementId::new();
    submit(
        &harness,
        requirement,
        DesiredAssignments::new().with_label(RoleLabel::Developer, [assignee(101)]),
    )
    .await?;
    let task = task_of(&harness, requirement, RoleLabel::Developer, 101).await?;

    for target in ["in_progress", "in_review"] {
        let outcome = move_task(&harness, task.id(), 101, Role::SoftwareDeveloper, target).await?;
        eyre::ensure!(
            matches!(outcome, StatusChangeOutcome::Applied(_)),
            "developer move to {target} refused: {outcome:?}"
        );
    }

    let outcome = move_task(&harness, task.id(), 101, Role::SoftwareDeveloper, "completed").await?;
    eyre::ensure!(
        outcome == StatusChangeOutcome::Denied(DenialReason::CannotDragFrom),
        "developer cannot pick up a task under review, got {outcome:?}"
    );

    let outcome = move_task(&harness, task.id(), 1, Role::DeliveryManager, "rework").await?;
    let StatusChangeOutcome::Applied(reworked) = outcome else {
        eyre::bail!("manager move refused: {outcome:?}");
    };
    eyre::ensure!(reworked.status() == Status::Rework, "task should be in rework");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stakeholder_may_not_move_own_task(harness: Harness) -> eyre::Result<()> {
    let requirement = RequirementId::new();
    submit(
        &harness,
        requirement,
        DesiredAssignments::new().with_label(RoleLabel::Designer, [assignee(301)]),
    )
    .await?;
    let task = task_of(&harness, requirement, RoleLabel::Designer, 301).await?;

    let outcome = move_task(&harness, task.id(), 301, Role::Stakeholder, "in_progress").await?;

    eyre::ensure!(
        outcome == StatusChangeOutcome::Denied(DenialReason::CannotDragFrom),
        "stakeholder move should be refused, got {outcome:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_assignee_task_is_gone(harness: Harness) -> eyre::Result<()> {
    let requirement = RequirementId::new();
    submit(
        &harness,
        requirement,
        DesiredAssignments::new().with_label(RoleLabel::Developer, [assignee(101)]),
    )
    .await?;
    let task = task_of(&harness, requirement, RoleLabel::Developer, 101).await?;
    submit(&harness, requirement, DesiredAssignments::new()).await?;

    let result = harness
        .status
        .change_status(ChangeStatusRequest::new(
            task.id(),
            assignee(101),
            RoleSet::single(Role::SoftwareDeveloper),
            "in_progress",
        ))
        .await;

    eyre::ensure!(result.is_err(), "deleted task must not be movable");
    Ok(())
}
