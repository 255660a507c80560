//! Error types for the Veilmarch system.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! These errors cover genuine failures: missing world entries, I/O while
//! reading an order document, internal inconsistencies. Per-line order
//! diagnostics are not errors in this sense; they are routed through the
//! reporting sinks (unit/faction logs, check report) and never abort a
//! parse.

use thiserror::Error;

use crate::id::{FactionId, RegionId, UnitId};

/// The main error type for Veilmarch operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a faction-not-found error.
    #[must_use]
    pub fn faction_not_found(id: FactionId) -> Self {
        Self::new(ErrorKind::FactionNotFound(id))
    }

    /// Creates a unit-not-found error.
    #[must_use]
    pub fn unit_not_found(id: UnitId) -> Self {
        Self::new(ErrorKind::UnitNotFound(id))
    }

    /// Creates a region-not-found error.
    #[must_use]
    pub fn region_not_found(id: RegionId) -> Self {
        Self::new(ErrorKind::RegionNotFound(id))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Faction was not found in the world.
    #[error("faction not found: {0}")]
    FactionNotFound(FactionId),

    /// Unit was not found in the world.
    #[error("unit not found: {0}")]
    UnitNotFound(UnitId),

    /// Region was not found in the world.
    #[error("region not found: {0}")]
    RegionNotFound(RegionId),

    /// I/O failure while reading or writing a document.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
