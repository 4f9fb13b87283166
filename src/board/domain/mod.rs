//! Domain model for role-based board permissions.
//!
//! Roles and statuses are closed enumerations. Each role owns an immutable
//! [`RoleTransitionPolicy`]; an [`EffectivePolicy`] is what a user holding
//! several roles may actually do.

mod catalogue;
mod error;
mod policy;
mod role;
mod status;

pub use catalogue::policy_for;
pub use error::{InvalidRoleSet, ParseRoleError, ParseStatusError, PolicyDomainError};
pub use policy::{DropTable, EffectivePolicy, RoleTransitionPolicy};
pub use role::{Role, RoleSet};
pub use status::Status;
