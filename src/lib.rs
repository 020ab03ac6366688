//! # Introduction
//!
//! filescript parses and runs small brace-delimited scripts that automate
//! file chores: moving, copying, renaming, deleting, listing, counting and
//! measuring files, with variables, `if`/`else` and `for` loops around them.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Interpreter → FileSystem / Terminal
//! ```
//!
//! 1. [`parser`] tokenises the source and builds an AST.
//! 2. [`interpreter`] walks the AST and dispatches file commands.
//! 3. [`memory`] holds the runtime [`memory::value::Value`]s and the
//!    variable [`memory::environment::Environment`].
//! 4. [`filesystem`] is the boundary every file command goes through.
//! 5. [`terminal`] records confirmations and diagnostics, optionally
//!    echoing them to the console.
//!
//! ## Example
//!
//! ```no_run
//! use filescript::interpreter::engine::ExecOptions;
//!
//! let script = r#"{ var n = CountFiles("inbox") if n > 0 { ListFiles("inbox") } }"#;
//! let interp = filescript::execute(script, ExecOptions::default())?;
//! println!("{:?}", interp.terminal().get_output());
//! # Ok::<(), filescript::interpreter::errors::ScriptError>(())
//! ```

pub mod filesystem;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod terminal;

use interpreter::engine::{ExecOptions, Interpreter};
use interpreter::errors::ScriptError;
use parser::parse::Parser;

/// Parse `source` and run it to completion over the host filesystem
pub fn execute(source: &str, options: ExecOptions) -> Result<Interpreter, ScriptError> {
    let program = Parser::new(source)?.parse_program()?;
    let mut interpreter = Interpreter::new(program, options);
    interpreter.run()?;
    Ok(interpreter)
}
