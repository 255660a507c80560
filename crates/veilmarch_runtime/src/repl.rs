//! The interactive order-check shell.
//!
//! Lines typed at the prompt accumulate into an order document; shell
//! commands (a leading `.`) inspect, check or clear the buffer. The
//! shell never mutates a world. It is a front end over the check mode
//! of the parser, the same validation a game host runs on submitted
//! orders.

use std::io::{self, Write};

use veilmarch_foundation::{Error, Result};
use veilmarch_parser::{Cursor, lookup, strip_at_marker};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive shell.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (registries, config, document buffer).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new shell with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new shell with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "orders> ".to_string(),
        }
    }

    /// Sets the session for this shell.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the shell loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-process iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn step(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            self.session.push_line(line);
            return Ok(true);
        }

        self.editor.add_history(&line);

        if let Some(command) = trimmed.strip_prefix('.') {
            return Ok(self.handle_command(command));
        }

        self.append_order(&line);
        Ok(true)
    }

    /// Buffers one order line, with an immediate keyword hint.
    fn append_order(&mut self, line: &str) {
        let (stripped, _) = strip_at_marker(line);
        if !stripped.trim_start().starts_with('#') {
            if let Some(token) = Cursor::new(&stripped).next_token() {
                if lookup(&token).is_none() {
                    println!("\x1b[2m({token} is not a recognized order)\x1b[0m");
                }
            }
        }
        self.session.push_line(line);
    }

    /// Dispatches one `.command`. Returns `false` to exit the shell.
    fn handle_command(&mut self, command: &str) -> bool {
        let mut words = command.split_whitespace();
        match words.next() {
            Some("check") => {
                let report = self.session.check();
                print!("{}", report.text);
            }
            Some("clear") => {
                self.session.clear();
                println!("Buffer cleared.");
            }
            Some("show") => {
                for (number, line) in self.session.lines().iter().enumerate() {
                    println!("{:4}  {line}", number + 1);
                }
            }
            Some("load") => match words.next() {
                Some(path) => match self.session.load_file(path) {
                    Ok(added) => println!("Loaded {added} line(s) from {path}."),
                    Err(e) => self.print_error(&e),
                },
                None => println!("Usage: .load <path>"),
            },
            Some("help") => print_command_help(),
            Some("quit") => return false,
            _ => println!("Unknown command: .{command} (try .help)"),
        }
        true
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("Veilmarch order check v{}", env!("CARGO_PKG_VERSION"));
        println!("Type order lines to buffer them, .check to validate, .help for commands.\n");

        let _ = io::stdout().flush();
    }
}

fn print_command_help() {
    println!(
        "Shell commands:
    .check        Validate the buffered document and print the report
    .show         List the buffered lines
    .clear        Discard the buffer
    .load <path>  Append the lines of a file to the buffer
    .help         Show this help
    .quit         Exit (Ctrl+D also works)

Anything else is buffered as an order line."
    );
}
