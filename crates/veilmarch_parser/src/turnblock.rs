//! The TURN block sub-parser.
//!
//! Once a TURN line is seen before its turn has come, subsequent lines
//! are captured verbatim into a [`TurnBlock`] batch. Only the first
//! keyword of each line is classified, just enough to track FORM nesting
//! and to notice the lines that may not appear inside a block.

use veilmarch_orders::TurnBlock;

use crate::keywords::OrderKind;

/// Captures one TURN block, line by line.
#[derive(Debug)]
pub(crate) struct TurnCapture {
    block: TurnBlock,
    form_depth: usize,
}

/// What [`TurnCapture::feed`] did with one line.
#[derive(Debug)]
pub(crate) enum CaptureStep {
    /// The line was captured (or dropped, for an illegal nested TURN).
    Captured,
    /// ENDTURN closed the block. `open_forms` counts FORM levels left
    /// unterminated inside it.
    Closed {
        /// The finished batch.
        block: TurnBlock,
        /// FORM levels still open at the ENDTURN.
        open_forms: usize,
    },
    /// A UNIT/END/faction-framing line arrived while the block was still
    /// open. The partial batch is handed back along with the open FORM
    /// count; the interrupting line must be reprocessed by the driver.
    Interrupted {
        /// The partially captured batch.
        block: TurnBlock,
        /// FORM levels still open at the interruption.
        open_forms: usize,
    },
    /// A nested TURN line, dropped with an error.
    Nested,
}

impl TurnCapture {
    /// Starts capturing a block; `repeating` comes from a `@TURN` marker.
    pub(crate) fn new(repeating: bool) -> Self {
        Self { block: TurnBlock::new(repeating), form_depth: 0 }
    }

    /// Feeds one verbatim line with its classified first keyword, `None`
    /// when the keyword is unknown. The caller classifies on the
    /// `@`-stripped form; the stored line keeps its markers.
    pub(crate) fn feed(&mut self, line: &str, kind: Option<OrderKind>) -> CaptureStep {
        match kind {
            Some(OrderKind::Turn) => CaptureStep::Nested,
            Some(OrderKind::EndTurn) => CaptureStep::Closed {
                block: self.take_block(),
                open_forms: self.form_depth,
            },
            Some(OrderKind::Form) => {
                self.form_depth += 1;
                self.capture(line)
            }
            Some(OrderKind::End) if self.form_depth > 0 => {
                self.form_depth -= 1;
                self.capture(line)
            }
            Some(OrderKind::EndForm) => {
                self.form_depth = self.form_depth.saturating_sub(1);
                self.capture(line)
            }
            Some(
                OrderKind::End
                | OrderKind::Unit
                | OrderKind::AtlantisOpen
                | OrderKind::AtlantisClose,
            ) => CaptureStep::Interrupted {
                block: self.take_block(),
                open_forms: self.form_depth,
            },
            _ => self.capture(line),
        }
    }

    /// Abandons the capture at end of document, handing back the partial
    /// batch and the number of FORM levels still open.
    pub(crate) fn interrupt(self) -> (TurnBlock, usize) {
        (self.block, self.form_depth)
    }

    fn capture(&mut self, line: &str) -> CaptureStep {
        self.block.push_line(line);
        CaptureStep::Captured
    }

    fn take_block(&mut self) -> TurnBlock {
        std::mem::replace(&mut self.block, TurnBlock::new(false))
    }
}
