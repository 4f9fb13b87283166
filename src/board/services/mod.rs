//! Policy resolution and transition gating services.

mod gate;
mod layout;
mod merger;

pub use gate::{DenialReason, TaskLifecycleGate, TransitionDecision, can_drag_from, can_transition};
pub use layout::{BoardColumn, BoardLayout};
pub use merger::{
    CachedPolicyResolver, PolicyConfig, PolicyMerger, UnknownRoleHandling, resolve_policy,
};
