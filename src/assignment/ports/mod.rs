//! Port contracts for role task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by assignment
//! services.

pub mod store;

pub use store::{RoleTaskStore, RoleTaskStoreError, RoleTaskStoreResult};

#[cfg(test)]
pub use store::MockRoleTaskStore;
