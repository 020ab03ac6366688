// Execution engine for the filescript interpreter

use crate::filesystem::{FileSystem, HostFileSystem};
use crate::interpreter::errors::RuntimeError;
use crate::memory::environment::Environment;
use crate::parser::ast::*;
use crate::terminal::Terminal;
use std::time::Duration;

/// Knobs for a script run
#[derive(Debug, Clone)]
pub struct ExecOptions {
    /// Abort when one `for` statement runs more iterations than this
    pub max_loop_iterations: Option<u64>,
    /// Longest single `Wait`; longer requests sleep for this long instead
    pub max_wait: Option<Duration>,
    /// Write command output through to the process console
    pub echo: bool,
    /// Style echoed output
    pub color: bool,
}

impl Default for ExecOptions {
    fn default() -> Self {
        ExecOptions {
            max_loop_iterations: None,
            max_wait: None,
            echo: false,
            color: true,
        }
    }
}

/// The main interpreter that executes a parsed script
pub struct Interpreter {
    /// Parsed script
    program: Program,

    /// Variables, shared by every statement of the run
    pub(crate) env: Environment,

    /// Command confirmations and diagnostics
    pub(crate) terminal: Terminal,

    /// Backend for the file commands
    pub(crate) fs: Box<dyn FileSystem>,

    pub(crate) options: ExecOptions,

    /// Current source location being executed
    pub(crate) current_location: SourceLocation,
}

impl Interpreter {
    /// Create a new interpreter over the host filesystem
    pub fn new(program: Program, options: ExecOptions) -> Self {
        let terminal = if options.echo {
            Terminal::echoing(options.color)
        } else {
            Terminal::new()
        };

        Interpreter {
            program,
            env: Environment::new(),
            terminal,
            fs: Box::new(HostFileSystem::new()),
            options,
            current_location: SourceLocation::new(1, 1),
        }
    }

    /// Replace the filesystem the file commands operate on
    pub fn with_file_system(mut self, fs: Box<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    /// Run the script from start to finish.
    ///
    /// Every run starts from an empty environment and an empty terminal.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        self.env.clear();
        self.terminal.clear();
        self.current_location = SourceLocation::new(1, 1);

        tracing::info!(statements = self.program.body.len(), "running script");

        // Statements borrow the tree while execution mutates `self`
        let program = std::mem::take(&mut self.program);
        let result = self.execute_block(&program.body);
        self.program = program;

        match &result {
            Ok(()) => tracing::info!(variables = self.env.len(), "script finished"),
            Err(e) => tracing::info!(error = %e, "script aborted"),
        }
        result
    }

    /// Execute statements in order
    pub(crate) fn execute_block(&mut self, block: &[Statement]) -> Result<(), RuntimeError> {
        for stmt in block {
            self.execute_statement(stmt)?;
        }
        Ok(())
    }

    /// Execute a single statement
    fn execute_statement(&mut self, stmt: &Statement) -> Result<(), RuntimeError> {
        self.current_location = stmt.location();
        tracing::debug!(line = self.current_location.line, column = self.current_location.column, "statement");

        match stmt {
            Statement::VarDecl { name, init: expr, .. } | Statement::Assign { name, value: expr, .. } => {
                let value = self.evaluate_expr(expr)?;
                tracing::trace!(%name, %value, "assign");
                self.env.set(name.as_str(), value);
                Ok(())
            }

            Statement::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => self.execute_if(condition, then_branch, else_branch.as_deref()),

            Statement::For {
                condition,
                body,
                location,
            } => self.execute_for(condition, body, *location),

            Statement::Command {
                command,
                args,
                location,
            } => {
                // Statement position discards any query result
                self.execute_command(*command, args, *location)?;
                Ok(())
            }
        }
    }

    // ===== Accessors =====

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn options(&self) -> &ExecOptions {
        &self.options
    }

    /// Location of the statement executed last; after a fatal error, the one that failed
    pub fn current_location(&self) -> SourceLocation {
        self.current_location
    }
}
