//! Requirement role assignments and their task records.
//!
//! Every (requirement, role label, assignee) triple owns at most one live
//! [`domain::RoleTask`]. When a requirement's assignees change, the
//! reconciler diffs the desired assignees against the stored tasks and
//! produces a plan of deletions and creations that the store applies as one
//! atomic unit. Replacing an assignee always deletes the old task and creates
//! a new one, so progress never leaks between assignees. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Reconciliation and orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
