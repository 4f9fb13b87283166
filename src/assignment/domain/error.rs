//! Error types for assignment domain validation and parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while constructing assignment domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentDomainError {
    /// The assignee identifier is invalid.
    #[error("invalid assignee id {0}, expected a positive integer")]
    InvalidAssigneeId(u64),
}

/// Error returned while parsing a functional role label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role label: {0}")]
pub struct ParseRoleLabelError(pub String);

/// Role label supplied by a caller that matches no recognized label.
///
/// Recorded on a plan rather than raised, so the remaining labels still
/// reconcile.
#[derive(Debug, Clone, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("unknown role label '{0}'")]
#[serde(transparent)]
pub struct UnknownRoleLabel(pub String);

impl From<ParseRoleLabelError> for UnknownRoleLabel {
    fn from(err: ParseRoleLabelError) -> Self {
        Self(err.0)
    }
}
