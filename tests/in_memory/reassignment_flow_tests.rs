//! Integration tests for repeated requirement edits.
//!
//! Covers:
//! - Replacing one assignee while keeping the others
//! - Clearing a label without touching other labels
//! - Repeated identical submissions
//! - Status survival for kept assignments

use super::helpers::{Harness, assignee, harness, submit, task_of};
use rstest::rstest;
use taskboard::{
    assignment::{
        domain::{DesiredAssignments, RequirementId, RoleLabel},
        services::{ChangeStatusRequest, ReassignRequirementRequest, StatusChangeOutcome},
    },
    board::domain::{Role, RoleSet, Status},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replacing_developer_leaves_qc_untouched(harness: Harness) -> eyre::Result<()> {
    let requirement = RequirementId::new();
    submit(
        &harness,
        requirement,
        DesiredAssignments::new()
            .with_label(RoleLabel::Developer, [assignee(101)])
            .with_label(RoleLabel::Qc, [assignee(201)]),
    )
    .await?;
    let qc_before = task_of(&harness, requirement, RoleLabel::Qc, 201).await?;

    submit(
        &harness,
        requirement,
        DesiredAssignments::new()
            .with_label(RoleLabel::Developer, [assignee(102)])
            .with_label(RoleLabel::Qc, [assignee(201)]),
    )
    .await?;

    let tasks = harness.reassignment.tasks_for(requirement).await?;
    eyre::ensure!(tasks.len() == 2, "expected two tasks, found {}", tasks.len());
    let developer = task_of(&harness, requirement, RoleLabel::Developer, 102).await?;
    eyre::ensure!(developer.status() == Status::ToDo, "new task must start in to_do");
    let qc_after = task_of(&harness, requirement, RoleLabel::Qc, 201).await?;
    eyre::ensure!(qc_after.id() == qc_before.id(), "qc task must be kept");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_developers_keeps_qc(harness: Harness) -> eyre::Result<()> {
    let requirement = RequirementId::new();
    submit(
        &harness,
        requirement,
        DesiredAssignments::new()
            .with_label(RoleLabel::Developer, [assignee(101), assignee(102)])
            .with_label(RoleLabel::Qc, [assignee(201)]),
    )
    .await?;

    submit(
        &harness,
        requirement,
        DesiredAssignments::new()
            .with_label(RoleLabel::Developer, Vec::new())
            .with_label(RoleLabel::Qc, [assignee(201)]),
    )
    .await?;

    let tasks = harness.reassignment.tasks_for(requirement).await?;
    eyre::ensure!(tasks.len() == 1, "expected one task, found {}", tasks.len());
    eyre::ensure!(
        tasks.iter().all(|task| task.label() == RoleLabel::Qc),
        "only the qc task should remain"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identical_submission_changes_nothing(harness: Harness) -> eyre::Result<()> {
    let requirement = RequirementId::new();
    let desired = DesiredAssignments::new()
        .with_label(RoleLabel::Designer, [assignee(301)])
        .with_label(RoleLabel::Qc, [assignee(201), assignee(202)]);
    submit(&harness, requirement, desired.clone()).await?;
    let before = harness.reassignment.tasks_for(requirement).await?;

    let outcome = harness
        .reassignment
        .reassign(ReassignRequirementRequest::new(requirement, desired))
        .await?;

    eyre::ensure!(outcome.plan.is_noop(), "second submission must be a no-op");
    let after = harness.reassignment.tasks_for(requirement).await?;
    eyre::ensure!(before == after, "stored tasks must be unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn kept_assignment_retains_its_progress(harness: Harness) -> eyre::Result<()> {
    let requirement = RequirementId::new();
    submit(
        &harness,
        requirement,
        DesiredAssignments::new().with_label(RoleLabel::Developer, [assignee(101)]),
    )
    .await?;
    let task = task_of(&harness, requirement, RoleLabel::Developer, 101).await?;
    let outcome = harness
        .status
        .change_status(ChangeStatusRequest::new(
            task.id(),
            assignee(101),
            RoleSet::single(Role::SoftwareDeveloper),
            "in_progress",
        ))
        .await?;
    eyre::ensure!(
        matches!(outcome, StatusChangeOutcome::Applied(_)),
        "move should be applied, got {outcome:?}"
    );

    submit(
        &harness,
        requirement,
        DesiredAssignments::new()
            .with_label(RoleLabel::Developer, [assignee(101)])
            .with_label(RoleLabel::Qc, [assignee(201)]),
    )
    .await?;

    let kept = task_of(&harness, requirement, RoleLabel::Developer, 101).await?;
    eyre::ensure!(kept.id() == task.id(), "developer task must be kept");
    eyre::ensure!(
        kept.status() == Status::InProgress,
        "kept task must keep its status, found {}",
        kept.status()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_label_is_skipped_by_default(harness: Harness) -> eyre::Result<()> {
    let requirement = RequirementId::new();
    let outcome = harness
        .reassignment
        .reassign(ReassignRequirementRequest::new(
            requirement,
            DesiredAssignments::new()
                .with("tester", [assignee(9)])
                .with_label(RoleLabel::Developer, [assignee(101)]),
        ))
        .await?;

    eyre::ensure!(
        outcome.plan.rejected_labels().len() == 1,
        "the unknown label should be reported"
    );
    eyre::ensure!(outcome.created.len() == 1, "the developer task is still created");
    Ok(())
}
