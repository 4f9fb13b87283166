//! Step definitions for role reassignment scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
