//! Deferred turn-block batches.
//!
//! A TURN ... ENDTURN block captures its body verbatim during submission;
//! the lines are replayed through the interpreter at the start of a later
//! turn. `@TURN` marks the batch as repeating, so it re-queues itself after
//! each replay.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One captured TURN block, queued on a unit for later replay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnBlock {
    /// The body lines, exactly as submitted (repeat markers included).
    pub lines: Vec<String>,
    /// Whether the block re-queues itself after replay.
    pub repeating: bool,
}

impl TurnBlock {
    /// Creates an empty, non-repeating batch.
    #[must_use]
    pub fn new(repeating: bool) -> Self {
        Self { lines: Vec::new(), repeating }
    }

    /// Appends one captured line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Whether any lines were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
