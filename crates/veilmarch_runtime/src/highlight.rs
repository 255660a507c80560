//! Syntax highlighting for the order-check shell.

use std::borrow::Cow;

use veilmarch_parser::{Cursor, lookup, strip_at_marker};

/// Highlighter for order-document syntax.
pub struct OrderHighlighter {}

impl OrderHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let keyword_known = {
            let (stripped, _) = strip_at_marker(line);
            Cursor::new(&stripped).next_token().is_some_and(|t| lookup(&t).is_some())
        };

        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.chars().peekable();
        let mut in_string = false;
        let mut in_comment = false;
        let mut first_word = true;

        while let Some(c) = chars.next() {
            if in_comment {
                result.push(c);
                continue;
            }

            match c {
                // Comments
                ';' if !in_string => {
                    in_comment = true;
                    result.push_str("\x1b[2;3m"); // dim italic
                    result.push(c);
                }

                // Strings
                '"' => {
                    if in_string {
                        result.push(c);
                        result.push_str("\x1b[0m");
                        in_string = false;
                    } else {
                        result.push_str("\x1b[33m"); // yellow
                        result.push(c);
                        in_string = true;
                    }
                }

                // Escape in string
                '\\' if in_string => {
                    result.push(c);
                    if let Some(next) = chars.next() {
                        result.push(next);
                    }
                }

                // Section directives (#atlantis, #end)
                '#' if !in_string => {
                    result.push_str("\x1b[36m"); // cyan
                    result.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_alphanumeric() {
                            result.push(chars.next().unwrap());
                        } else {
                            break;
                        }
                    }
                    result.push_str("\x1b[0m");
                    first_word = false;
                }

                // Repeat marker
                '@' if !in_string => {
                    result.push_str("\x1b[36m@\x1b[0m"); // cyan
                }

                // Numbers
                c if c.is_ascii_digit() && !in_string => {
                    result.push_str("\x1b[35m"); // magenta
                    result.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_ascii_digit() {
                            result.push(chars.next().unwrap());
                        } else {
                            break;
                        }
                    }
                    result.push_str("\x1b[0m");
                    first_word = false;
                }

                // The leading keyword, colored by whether the table knows it
                c if c.is_alphabetic() && !in_string && first_word => {
                    if keyword_known {
                        result.push_str("\x1b[1;32m"); // bold green
                    } else {
                        result.push_str("\x1b[31m"); // red
                    }
                    result.push(c);
                    while let Some(&next) = chars.peek() {
                        if next.is_alphanumeric() || next == '_' {
                            result.push(chars.next().unwrap());
                        } else {
                            break;
                        }
                    }
                    result.push_str("\x1b[0m");
                    first_word = false;
                }

                c => {
                    if !c.is_whitespace() {
                        first_word = false;
                    }
                    result.push(c);
                }
            }
        }

        if in_string || in_comment {
            result.push_str("\x1b[0m");
        }

        Cow::Owned(result)
    }
}

impl Default for OrderHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
