//! Core identifiers and error types for Veilmarch.
//!
//! This crate provides:
//! - Numeric id newtypes ([`FactionId`], [`UnitId`], [`RegionId`], …)
//! - [`Error`] / [`ErrorKind`] - error types shared by all layers
//! - [`Result`] - the common result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;

pub use error::{Error, ErrorKind};
pub use id::{FactionId, ItemId, ObjectNum, RegionId, SkillId, StructureId, UnitId};

/// The common result type for Veilmarch operations.
pub type Result<T> = std::result::Result<T, Error>;
