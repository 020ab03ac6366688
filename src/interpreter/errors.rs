//! Error types for the filescript interpreter
//!
//! This module defines [`RuntimeError`], which represents the fatal errors that
//! can occur during execution, and [`ScriptError`], which also covers parsing.
//!
//! All runtime errors are fatal: they halt the script immediately. Failures
//! of individual file commands are *not* runtime errors; see
//! [`CommandError`](crate::interpreter::commands::CommandError).

use crate::parser::ast::SourceLocation;
use crate::parser::parse::ParseError;
use thiserror::Error;

/// Runtime errors that can occur during execution
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// `-` applied to a Text operand
    #[error("Invalid subtraction at line {}: cannot subtract {right} from {left}", .location.line)]
    InvalidSubtraction {
        left: String,
        right: String,
        location: SourceLocation,
    },

    /// Command called with the wrong number of arguments
    #[error(
        "{command} expects {expected} argument{}, got {got} at line {}",
        plural(.expected),
        .location.line
    )]
    ArgumentCountMismatch {
        command: String,
        expected: usize,
        got: usize,
        location: SourceLocation,
    },

    /// A single `for` statement ran more iterations than allowed
    #[error("Loop exceeded {limit} iterations at line {}", .location.line)]
    LoopLimitExceeded { limit: u64, location: SourceLocation },
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

impl RuntimeError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            RuntimeError::InvalidSubtraction { location, .. }
            | RuntimeError::ArgumentCountMismatch { location, .. }
            | RuntimeError::LoopLimitExceeded { location, .. } => location,
        }
    }
}

/// Anything that aborts a script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}
