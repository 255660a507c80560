//! Veilmarch - turn-based strategy order interpreter
//!
//! This crate re-exports all layers of the Veilmarch system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: veilmarch_runtime    — Order-check shell, CLI
//! Layer 2: veilmarch_parser     — Tokenizer, keyword table, block driver,
//!                                 order builders, check mode
//! Layer 1: veilmarch_orders     — Parsed order data model
//!          veilmarch_world      — Registries, factions, units, regions
//! Layer 0: veilmarch_foundation — Core ids and error types
//! ```

pub use veilmarch_foundation as foundation;
pub use veilmarch_orders as orders;
pub use veilmarch_parser as parser;
pub use veilmarch_runtime as runtime;
pub use veilmarch_world as world;
