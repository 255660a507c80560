//! Order-check shell and CLI for Veilmarch.
//!
//! This crate provides:
//! - [`Repl`] - Interactive shell that buffers and checks order lines
//! - [`Session`] - Registries, configuration and the document buffer
//! - The `veilmarch` binary for batch-checking order files

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::Session;
