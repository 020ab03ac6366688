//! File command dispatch
//!
//! Commands fail in two tiers:
//! - a wrong argument count is a [`RuntimeError`] and stops the script
//! - everything else ([`CommandError`]) is reported on the terminal and the
//!   script carries on; queries then evaluate to `0`

use crate::filesystem::FsError;
use crate::interpreter::constants::QUERY_FALLBACK;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::parser::ast::{Expr, FileCommand, SourceLocation};
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// A file command that ran but did nothing
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("invalid duration {0}: expected a non-negative number of milliseconds")]
    InvalidDuration(String),
}

/// Operational result of one command: its value (queries only) or why it failed
pub type CommandOutcome = Result<Option<Value>, CommandError>;

impl Interpreter {
    /// Evaluate the arguments, run the command and report the outcome.
    ///
    /// Returns the query value, `0` for a failed query, `None` for the rest.
    pub(crate) fn execute_command(
        &mut self,
        command: FileCommand,
        args: &[Expr],
        location: SourceLocation,
    ) -> Result<Option<Value>, RuntimeError> {
        let values = args
            .iter()
            .map(|arg| self.evaluate_expr(arg))
            .collect::<Result<Vec<_>, _>>()?;

        match self.dispatch_command(command, &values, location)? {
            Ok(value) => Ok(value),
            Err(err) => {
                self.report_failure(command, &err, location);
                Ok(command
                    .is_query()
                    .then_some(Value::Number(QUERY_FALLBACK)))
            }
        }
    }

    /// Run `command` on already evaluated arguments.
    ///
    /// The outer `Result` is fatal, the inner one is not. Confirmations are
    /// printed here; failures are left to the caller.
    pub fn dispatch_command(
        &mut self,
        command: FileCommand,
        args: &[Value],
        location: SourceLocation,
    ) -> Result<CommandOutcome, RuntimeError> {
        if args.len() != command.arity() {
            return Err(RuntimeError::ArgumentCountMismatch {
                command: command.name().to_string(),
                expected: command.arity(),
                got: args.len(),
                location,
            });
        }

        tracing::debug!(%command, args = args.len(), line = location.line, "dispatch");
        Ok(self.run_command(command, args, location))
    }

    fn run_command(&mut self, command: FileCommand, args: &[Value], location: SourceLocation) -> CommandOutcome {
        match command {
            FileCommand::MoveFile => {
                let (src, dst) = (args[0].to_text(), args[1].to_text());
                self.fs.move_file(&src, &dst)?;
                self.terminal.print(format!("Moved: {} -> {}", src, dst), location);
                Ok(None)
            }

            FileCommand::CopyFile => {
                let (src, dst) = (args[0].to_text(), args[1].to_text());
                let bytes = self.fs.copy_file(&src, &dst)?;
                tracing::trace!(bytes, "copied");
                self.terminal.print(format!("Copied: {} -> {}", src, dst), location);
                Ok(None)
            }

            FileCommand::RenameFile => {
                let (old, new) = (args[0].to_text(), args[1].to_text());
                self.fs.rename_file(&old, &new)?;
                self.terminal.print(format!("Renamed: {} -> {}", old, new), location);
                Ok(None)
            }

            FileCommand::DeleteFile => {
                let path = args[0].to_text();
                self.fs.delete_file(&path)?;
                self.terminal.print(format!("Deleted: {}", path), location);
                Ok(None)
            }

            FileCommand::ListFiles => {
                let dir = args[0].to_text();
                let names = self.fs.list_files(&dir)?;
                self.terminal.print(format!("Files in {}:", dir), location);
                for name in names {
                    self.terminal.print(format!("  {}", name), location);
                }
                Ok(None)
            }

            FileCommand::CountFiles => {
                let dir = args[0].to_text();
                let count = self.fs.count_files(&dir)?;
                self.terminal.print(format!("Files in {}: {}", dir, count), location);
                Ok(Some(Value::Number(count as f64)))
            }

            FileCommand::CheckSpace => {
                let dir = args[0].to_text();
                let bytes = self.fs.check_space(&dir)?;
                self.terminal
                    .print(format!("Space used by {}: {} bytes", dir, bytes), location);
                Ok(Some(Value::Number(bytes as f64)))
            }

            FileCommand::Wait => {
                let millis = wait_millis(&args[0])?;
                self.terminal.print(format!("Waiting {} ms...", millis), location);
                self.wait(millis, location);
                Ok(None)
            }
        }
    }

    fn wait(&self, millis: u64, location: SourceLocation) {
        let requested = Duration::from_millis(millis);
        let duration = match self.options.max_wait {
            Some(cap) if requested > cap => {
                tracing::warn!(
                    requested_ms = millis,
                    cap_ms = cap.as_millis() as u64,
                    line = location.line,
                    "wait capped"
                );
                cap
            }
            _ => requested,
        };
        thread::sleep(duration);
    }

    fn report_failure(&mut self, command: FileCommand, err: &CommandError, location: SourceLocation) {
        tracing::warn!(%command, error = %err, line = location.line, "command failed");

        let message = match err {
            CommandError::Fs(FsError::NotFound(_) | FsError::DirectoryNotFound(_)) => err.to_string(),
            _ => format!("Error running {}: {}", command, err),
        };
        self.terminal.error(message, location);
    }
}

/// Whole milliseconds requested by a `Wait` argument
fn wait_millis(value: &Value) -> Result<u64, CommandError> {
    match value {
        // Fractions truncate; the cast saturates above u64::MAX
        Value::Number(n) if n.is_finite() && *n >= 0.0 => Ok(n.trunc() as u64),
        Value::Number(n) => Err(CommandError::InvalidDuration(n.to_string())),
        Value::Text(s) => Err(CommandError::InvalidDuration(format!("\"{}\"", s))),
    }
}
