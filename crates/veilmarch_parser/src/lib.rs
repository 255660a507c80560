//! Order-document parser for the Veilmarch turn engine.
//!
//! This crate turns a faction's plain-text order document into parsed
//! orders on the units of a [`veilmarch_world::World`], or into a
//! diagnostic report when run in check mode.
//!
//! # Architecture
//!
//! ```text
//! "#atlantis 2 \"sesame\"\nunit 5\n@work\n..."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["unit", "5"], quote and ; comment aware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ KEYWORD         │  → OrderKind::Unit (exact match after
//! │ LOOKUP          │    case and underscore folding)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ BLOCK DRIVER    │  → faction sections, UNIT selection, FORM
//! │                 │    chains, TURN capture, @ templates
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ORDER BUILDERS  │  → one builder per keyword, filling the
//! │                 │    unit's order slots or logging errors
//! └─────────────────┘
//! ```
//!
//! The same builders serve two front doors. [`parse_document`] mutates
//! the world and is what the turn engine calls when orders arrive.
//! [`check_document`] runs the identical grammar against a throwaway
//! unit and produces an echo-plus-errors [`CheckReport`] without ever
//! touching game state.
//!
//! # Modules
//!
//! - [`tokenizer`] - Line cursor, quoted tokens, comments, `@` markers
//! - [`keywords`] - Normalizing order keyword table
//! - [`driver`] - Section, unit, FORM and TURN block structure
//! - [`checker`] - Check-mode echo log and report
//!
//! The per-keyword builders live in a private `builders` module; they
//! are reached only through the driver.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod checker;
pub mod driver;
pub mod keywords;
pub mod tokenizer;

mod builders;
mod context;
mod turnblock;

// Re-export main types for convenience
pub use checker::{CheckLog, CheckReport};
pub use driver::{ParsePhase, check_document, parse_document};
pub use keywords::{OrderKind, lookup};
pub use tokenizer::{Cursor, strip_at_marker};
