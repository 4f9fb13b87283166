//! Planning of role task changes when requirement assignees change.

use crate::assignment::domain::{
    AssigneeId, DesiredAssignments, ReconciliationPlan, RequirementId, RoleLabel, RoleTask,
    RoleTaskId, UnknownRoleLabel,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use tracing::warn;

/// How labels outside the recognized set are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownLabelHandling {
    /// Leave the label out of the plan and report it; other labels still
    /// reconcile.
    #[default]
    Skip,
    /// Fail the whole reconciliation.
    Reject,
}

/// Configuration for role assignment reconciliation.
///
/// # Examples
///
/// ```
/// use taskboard::assignment::services::{ReconcileConfig, UnknownLabelHandling};
///
/// assert_eq!(
///     ReconcileConfig::default().unknown_labels,
///     UnknownLabelHandling::Skip
/// );
/// assert_eq!(
///     ReconcileConfig::fail_fast().unknown_labels,
///     UnknownLabelHandling::Reject
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileConfig {
    /// Treatment of unrecognized role labels.
    pub unknown_labels: UnknownLabelHandling,
}

impl ReconcileConfig {
    /// Creates a configuration that rejects the whole call on any unknown
    /// label.
    #[must_use]
    pub const fn fail_fast() -> Self {
        Self {
            unknown_labels: UnknownLabelHandling::Reject,
        }
    }

    /// Parses a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the document is malformed.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Errors that prevent any plan from being produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReconcileError {
    /// A current task belongs to another requirement.
    #[error("role task {task_id} belongs to requirement {found}, not {expected}")]
    ForeignTask {
        /// Offending task.
        task_id: RoleTaskId,
        /// Requirement being reconciled.
        expected: RequirementId,
        /// Requirement the task belongs to.
        found: RequirementId,
    },

    /// Unknown labels were supplied while running fail-fast.
    #[error("unknown role labels: {}", join_labels(.0))]
    UnknownRoleLabels(Vec<UnknownRoleLabel>),
}

fn join_labels(labels: &[UnknownRoleLabel]) -> String {
    labels
        .iter()
        .map(|label| label.0.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Current live tasks of one label, grouped by assignee, earliest first.
type LabelTasks<'a> = BTreeMap<AssigneeId, Vec<&'a RoleTask>>;

/// Pure planner diffing desired assignees against stored role tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleAssignmentReconciler {
    config: ReconcileConfig,
}

impl RoleAssignmentReconciler {
    /// Creates a reconciler with the given configuration.
    #[must_use]
    pub const fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Plans the task changes that turn `current` into `desired`.
    ///
    /// Each label is diffed on its own: removed assignees lose their task,
    /// added assignees get a new one and kept assignees are left untouched
    /// with their progress. A label that is absent from `desired` or maps to
    /// no assignees removes every task for that label. When the store holds
    /// more than one live task for the same assignee and label, the earliest
    /// is kept (or dropped with the others) and the rest are deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::ForeignTask`] when `current` contains a
    /// task of another requirement, and [`ReconcileError::UnknownRoleLabels`]
    /// when unknown labels are rejected by configuration.
    pub fn reconcile(
        &self,
        requirement_id: RequirementId,
        desired: &DesiredAssignments,
        current: &[RoleTask],
    ) -> Result<ReconciliationPlan, ReconcileError> {
        if let Some(task) = current
            .iter()
            .find(|task| task.requirement_id() != requirement_id)
        {
            return Err(ReconcileError::ForeignTask {
                task_id: task.id(),
                expected: requirement_id,
                found: task.requirement_id(),
            });
        }

        let (wanted, rejected) = parse_desired(desired);
        if !rejected.is_empty() && self.config.unknown_labels == UnknownLabelHandling::Reject {
            return Err(ReconcileError::UnknownRoleLabels(rejected));
        }

        let mut plan = ReconciliationPlan::empty(requirement_id);
        for label in rejected {
            warn!(
                requirement = %requirement_id,
                label = %label.0,
                "skipping unknown role label"
            );
            plan.reject(label);
        }

        let existing = group_current(current);
        let nobody = BTreeSet::new();
        let no_tasks = LabelTasks::new();
        for label in RoleLabel::ALL {
            let want = wanted.get(&label).unwrap_or(&nobody);
            let have = existing.get(&label).unwrap_or(&no_tasks);
            plan_label(&mut plan, label, want, have);
        }
        Ok(plan)
    }
}

/// Reconciles with the default configuration.
///
/// # Errors
///
/// Returns [`ReconcileError::ForeignTask`] when `current` contains a task of
/// another requirement.
pub fn reconcile(
    requirement_id: RequirementId,
    desired: &DesiredAssignments,
    current: &[RoleTask],
) -> Result<ReconciliationPlan, ReconcileError> {
    RoleAssignmentReconciler::default().reconcile(requirement_id, desired, current)
}

fn parse_desired(
    desired: &DesiredAssignments,
) -> (
    BTreeMap<RoleLabel, BTreeSet<AssigneeId>>,
    Vec<UnknownRoleLabel>,
) {
    let mut wanted: BTreeMap<RoleLabel, BTreeSet<AssigneeId>> = BTreeMap::new();
    let mut rejected: Vec<UnknownRoleLabel> = Vec::new();
    for (raw, assignees) in desired.entries() {
        match RoleLabel::try_from(raw) {
            Ok(label) => wanted
                .entry(label)
                .or_default()
                .extend(assignees.iter().copied()),
            Err(err) => rejected.push(err.into()),
        }
    }
    (wanted, rejected)
}

/// Groups the snapshot by label and assignee.
///
/// A record repeated in the snapshot is counted once, so a kept task can
/// never also be scheduled for deletion.
fn group_current(current: &[RoleTask]) -> BTreeMap<RoleLabel, LabelTasks<'_>> {
    let mut grouped: BTreeMap<RoleLabel, LabelTasks<'_>> = BTreeMap::new();
    let mut seen = BTreeSet::new();
    for task in current {
        if !seen.insert(task.id()) {
            continue;
        }
        grouped
            .entry(task.label())
            .or_default()
            .entry(task.assignee())
            .or_default()
            .push(task);
    }
    for tasks in grouped.values_mut().flat_map(BTreeMap::values_mut) {
        tasks.sort_by_key(|task| (task.created_at(), task.id()));
    }
    grouped
}

fn plan_label(
    plan: &mut ReconciliationPlan,
    label: RoleLabel,
    want: &BTreeSet<AssigneeId>,
    have: &LabelTasks<'_>,
) {
    for (assignee, tasks) in have {
        let mut ordered = tasks.iter();
        if want.contains(assignee)
            && let Some(kept) = ordered.next()
        {
            plan.keep(kept.id());
        }
        for stale in ordered {
            plan.delete(stale.id());
        }
    }

    for assignee in want {
        if !have.contains_key(assignee) {
            plan.create(label, *assignee);
        }
    }
}
