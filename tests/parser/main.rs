//! Integration tests for the veilmarch_parser crate.
//!
//! Tests for the full document pipeline:
//! - Faction-section framing and suppression
//! - FORM chains, TURN capture, and repeat templates
//! - Check mode and its agreement with commit mode

mod block_tests;
mod check_tests;
mod section_tests;
