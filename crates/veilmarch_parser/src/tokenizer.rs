//! Line tokenization.
//!
//! Order lines are tokenized lazily: a [`Cursor`] walks one line, and each
//! builder pulls exactly the tokens its grammar needs. A token is either a
//! bare word (ends at whitespace or `;`) or a quoted literal (ends at the
//! closing `"`); `;` starts a comment that hides the rest of the line.

/// A token cursor over one order line.
///
/// The cursor owns its position; builders advance it by pulling tokens and
/// never touch the underlying text directly.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of a line.
    #[must_use]
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Extracts the next token, consuming it.
    ///
    /// Returns `None` once the line is exhausted, a comment begins, or an
    /// unterminated quote discards the remainder.
    pub fn next_token(&mut self) -> Option<String> {
        self.rest = self.rest.trim_start();

        let mut chars = self.rest.char_indices();
        match chars.next() {
            None => None,
            Some((_, ';')) => {
                self.rest = "";
                None
            }
            Some((_, '"')) => {
                let body = &self.rest[1..];
                match body.find('"') {
                    Some(end) => {
                        let token = body[..end].to_string();
                        self.rest = &body[end + 1..];
                        Some(token)
                    }
                    None => {
                        // Unterminated quote: the rest of the line is lost.
                        self.rest = "";
                        None
                    }
                }
            }
            Some(_) => {
                let end = self
                    .rest
                    .find(|c: char| c.is_ascii_whitespace() || c == ';')
                    .unwrap_or(self.rest.len());
                let token = self.rest[..end].to_string();
                self.rest = &self.rest[end..];
                Some(token)
            }
        }
    }

    /// Whether any token remains ahead of the cursor.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.clone().next_token().is_some()
    }
}

/// Removes one leading `@` repeat marker, replacing it with a space so
/// column positions survive, and reports whether one was present.
#[must_use]
pub fn strip_at_marker(line: &str) -> (String, bool) {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix('@') {
        let lead = line.len() - trimmed.len();
        (format!("{} {rest}", &line[..lead]), true)
    } else {
        (line.to_string(), false)
    }
}
