//! Error types for board domain parsing and policy validation.

use super::{Role, Status};
use thiserror::Error;

/// Error returned while parsing a role name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Error returned while parsing a board status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Errors describing an unusable role set supplied by a caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidRoleSet {
    /// No roles were supplied.
    #[error("role set must not be empty")]
    Empty,

    /// A role name did not match any known role.
    #[error("unrecognized role '{0}'")]
    UnrecognizedRole(String),
}

impl From<ParseRoleError> for InvalidRoleSet {
    fn from(err: ParseRoleError) -> Self {
        Self::UnrecognizedRole(err.0)
    }
}

/// Invariant violations detected while constructing a role policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyDomainError {
    /// A drag source is not among the role's visible statuses.
    #[error("{role}: drag source {status} is not an allowed status")]
    DragSourceNotAllowed {
        /// Role owning the policy.
        role: Role,
        /// Offending status.
        status: Status,
    },

    /// A drop table key is not among the role's visible statuses.
    #[error("{role}: drop source {status} is not an allowed status")]
    DropSourceNotAllowed {
        /// Role owning the policy.
        role: Role,
        /// Offending status.
        status: Status,
    },

    /// A drop table key cannot be picked up by the role.
    #[error("{role}: drop source {status} is not a drag source")]
    DropSourceNotDraggable {
        /// Role owning the policy.
        role: Role,
        /// Offending status.
        status: Status,
    },

    /// A drop target is not among the role's visible statuses.
    #[error("{role}: drop target {from} -> {to} leaves the allowed statuses")]
    DropTargetNotAllowed {
        /// Role owning the policy.
        role: Role,
        /// Source column of the offending move.
        from: Status,
        /// Target column of the offending move.
        to: Status,
    },
}
