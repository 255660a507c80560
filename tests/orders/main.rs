//! Integration tests for order slots and payloads.
//!
//! Whole documents run through the commit-mode interpreter and the tests
//! assert on the command slots that land on the units:
//! - Month-slot exclusivity, overwrites, and the tax-policy switch
//! - Instant flags applied during the parse
//! - Transfer, trade, and shipment payload shapes

mod slot_tests;
mod transfer_tests;
