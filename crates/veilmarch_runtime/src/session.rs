//! Session state for the order-check shell.
//!
//! The session holds the rulebook registries, the game configuration and
//! the order lines typed or loaded so far. Checking never needs a world;
//! the document is validated against the registries alone.

use std::fs;
use std::path::{Path, PathBuf};

use veilmarch_foundation::Result;
use veilmarch_parser::{CheckReport, check_document};
use veilmarch_world::{GameConfig, Registries};

/// State for one interactive check session.
pub struct Session {
    /// Item, skill, structure and direction vocabularies.
    registries: Registries,

    /// Game options the grammar consults (withdraw, transport, tax).
    config: GameConfig,

    /// The order document assembled so far, one entry per line.
    buffer: Vec<String>,

    /// Current directory for relative file resolution.
    load_path: PathBuf,
}

impl Session {
    /// Creates a session with the standard rulebook and default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registries: Registries::standard(),
            config: GameConfig::default(),
            buffer: Vec::new(),
            load_path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Replaces the game configuration.
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// The registries the session checks against.
    #[must_use]
    pub const fn registries(&self) -> &Registries {
        &self.registries
    }

    /// The active game configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Appends one order line to the document buffer.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.buffer.push(line.into());
    }

    /// Discards the buffered document.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Whether no lines have been buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The buffered lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.buffer
    }

    /// The buffered document as one newline-joined string.
    #[must_use]
    pub fn document(&self) -> String {
        self.buffer.join("\n")
    }

    /// Runs the order check over the buffered document.
    #[must_use]
    pub fn check(&self) -> CheckReport {
        check_document(&self.document(), &self.registries, &self.config)
    }

    /// Runs the order check over an arbitrary document.
    #[must_use]
    pub fn check_source(&self, source: &str) -> CheckReport {
        check_document(source, &self.registries, &self.config)
    }

    /// Appends the lines of a file to the buffer, returning how many
    /// were added.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load_file(&mut self, path: &str) -> Result<usize> {
        let resolved = self.resolve_path(path);
        let source = fs::read_to_string(&resolved)?;
        let mut added = 0;
        for line in source.lines() {
            self.buffer.push(line.to_string());
            added += 1;
        }
        if let Some(parent) = resolved.parent() {
            self.load_path = parent.to_path_buf();
        }
        Ok(added)
    }

    /// Resolves a path relative to the session's load path.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.load_path.join(candidate)
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
