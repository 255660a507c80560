//! Integration tests for the veilmarch_world crate.
//!
//! Tests for the state layer the interpreter runs against:
//! - Registry lookups and name folding
//! - Alias scoping, the unit-number allocator, and passwords
//! - Structural world snapshots

mod registry_tests;
mod state_tests;
