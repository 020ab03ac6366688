// Captured console output for file command reports

use crate::parser::ast::SourceLocation;
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Which console stream a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    /// Confirmations and command results
    Stdout,
    /// Diagnostics for failed commands
    Stderr,
}

/// A line of terminal output with source location tracking
#[derive(Debug, Clone)]
pub struct TerminalLine {
    pub text: String,
    pub stream: Stream,
    pub location: SourceLocation,
}

/// Records every line a script run prints.
///
/// When echo is enabled each line is also written to the real stdout/stderr
/// as it is recorded, so `Wait` progress shows up before the sleep.
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    pub lines: Vec<TerminalLine>,
    echo: bool,
    color: bool,
}

impl Terminal {
    /// A terminal that only records
    pub fn new() -> Self {
        Terminal::default()
    }

    /// A terminal that records and writes through to the process console
    pub fn echoing(color: bool) -> Self {
        Terminal {
            lines: Vec::new(),
            echo: true,
            color,
        }
    }

    /// Print a confirmation line
    pub fn print(&mut self, text: impl Into<String>, location: SourceLocation) {
        self.push(text.into(), Stream::Stdout, location);
    }

    /// Print a diagnostic line
    pub fn error(&mut self, text: impl Into<String>, location: SourceLocation) {
        self.push(text.into(), Stream::Stderr, location);
    }

    /// Get all stdout lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines_on(Stream::Stdout)
    }

    /// Get all stderr lines as a vector of strings
    pub fn get_errors(&self) -> Vec<String> {
        self.lines_on(Stream::Stderr)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn lines_on(&self, stream: Stream) -> Vec<String> {
        self.lines
            .iter()
            .filter(|line| line.stream == stream)
            .map(|line| line.text.clone())
            .collect()
    }

    fn push(&mut self, text: String, stream: Stream, location: SourceLocation) {
        let line = TerminalLine {
            text,
            stream,
            location,
        };
        if self.echo {
            self.write_through(&line);
        }
        self.lines.push(line);
    }

    fn write_through(&self, line: &TerminalLine) {
        let text = line.text.as_str();
        // A closed console must not abort the script, so write errors are dropped
        let _ = match (line.stream, self.color) {
            (Stream::Stdout, true) => writeln!(io::stdout().lock(), "{}", text.green()),
            (Stream::Stdout, false) => writeln!(io::stdout().lock(), "{}", text),
            (Stream::Stderr, true) => writeln!(io::stderr().lock(), "{}", text.yellow()),
            (Stream::Stderr, false) => writeln!(io::stderr().lock(), "{}", text),
        };
    }
}
