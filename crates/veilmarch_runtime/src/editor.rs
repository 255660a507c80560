//! Line editor abstraction for the order-check shell.
//!
//! This module provides a trait-based abstraction over line editing
//! libraries, allowing the shell to use rustyline while remaining
//! swappable (and testable with a scripted editor).

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};

use veilmarch_foundation::{Error, ErrorKind, Result};

use crate::highlight::OrderHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline that provides completion, hints and highlighting.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct OrderHelper {
    #[rustyline(Completer)]
    completer: OrderCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: LineValidator,
    highlighter: OrderHighlighter,
}

impl Highlighter for OrderHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for order keywords and shell commands.
struct OrderCompleter {
    keywords: Vec<String>,
}

impl OrderCompleter {
    fn new() -> Self {
        Self { keywords: Self::default_keywords() }
    }

    fn default_keywords() -> Vec<String> {
        vec![
            // Shell commands
            ".check".into(),
            ".clear".into(),
            ".help".into(),
            ".load".into(),
            ".show".into(),
            ".quit".into(),
            // Framing
            "#atlantis".into(),
            "#end".into(),
            // Orders
            "address".into(),
            "advance".into(),
            "armor".into(),
            "assassinate".into(),
            "attack".into(),
            "autotax".into(),
            "avoid".into(),
            "behind".into(),
            "build".into(),
            "buy".into(),
            "cast".into(),
            "claim".into(),
            "combat".into(),
            "consume".into(),
            "declare".into(),
            "describe".into(),
            "destroy".into(),
            "end".into(),
            "endform".into(),
            "endturn".into(),
            "enter".into(),
            "entertain".into(),
            "evict".into(),
            "exchange".into(),
            "faction".into(),
            "find".into(),
            "forget".into(),
            "form".into(),
            "give".into(),
            "guard".into(),
            "hold".into(),
            "join".into(),
            "leave".into(),
            "move".into(),
            "name".into(),
            "noaid".into(),
            "nocross".into(),
            "nospoils".into(),
            "option".into(),
            "password".into(),
            "pillage".into(),
            "prepare".into(),
            "produce".into(),
            "promote".into(),
            "quit".into(),
            "restart".into(),
            "reveal".into(),
            "sail".into(),
            "sell".into(),
            "share".into(),
            "show".into(),
            "spoils".into(),
            "steal".into(),
            "study".into(),
            "tax".into(),
            "teach".into(),
            "transport".into(),
            "turn".into(),
            "unit".into(),
            "weapon".into(),
            "withdraw".into(),
            "work".into(),
        ]
    }
}

impl Completer for OrderCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Find the start of the current word
        let start = line[..pos].rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let word = line[start..pos].trim_start_matches('@');
        let marker = line[start..pos].len() - word.len();

        let candidates: Vec<Pair> = self
            .keywords
            .iter()
            .filter(|kw| kw.starts_with(&word.to_ascii_lowercase()))
            .map(|kw| Pair { display: kw.clone(), replacement: kw.clone() })
            .collect();

        Ok((start + marker, candidates))
    }
}

/// Orders are one line each; every input is complete as typed.
#[derive(Default)]
struct LineValidator;

impl Validator for LineValidator {}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<OrderHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    ///
    /// # Panics
    ///
    /// Panics if the history size configuration is invalid (should not
    /// happen with hardcoded valid values).
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .expect("valid history size")
            .build();

        let helper = OrderHelper {
            completer: OrderCompleter::new(),
            hinter: HistoryHinter::new(),
            validator: LineValidator,
            highlighter: OrderHighlighter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
