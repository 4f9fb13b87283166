//! Taskboard: role-based task lifecycle and reassignment engine.
//!
//! This crate holds the business rules behind a project-management task
//! board: which columns each role may see and move tasks between, and how
//! per-role task records are reconciled when a requirement's assignees
//! change.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Role policies, policy merging and the transition gate
//! - [`assignment`]: Role task records, reassignment planning and task moves

pub mod assignment;
pub mod board;
