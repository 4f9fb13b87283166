//! Role-based task board permissions.
//!
//! Decides, per user role, which board columns a user sees and which
//! drag/drop moves between columns are legal. Policies for individual roles
//! are immutable tables; a user's effective permissions are the merge of
//! every role they hold. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Merge and gate services in [`services`]
//!
//! Nothing here performs I/O. The gate is a pure predicate, so callers apply
//! any resulting status change to storage themselves.

pub mod domain;
pub mod services;
