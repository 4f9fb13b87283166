//! Unit tests for role assignment reconciliation.
