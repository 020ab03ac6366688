// AST (Abstract Syntax Tree) definitions for filescript

use std::fmt;
use std::str::FromStr;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Binary operators. Both share one precedence level and associate left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
}

/// Comparators allowed in `if` and `for` conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Lt,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
        };
        f.write_str(symbol)
    }
}

/// The fixed set of built-in file commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCommand {
    MoveFile,
    CopyFile,
    RenameFile,
    DeleteFile,
    ListFiles,
    CountFiles,
    CheckSpace,
    Wait,
}

impl FileCommand {
    pub const ALL: [FileCommand; 8] = [
        FileCommand::MoveFile,
        FileCommand::CopyFile,
        FileCommand::RenameFile,
        FileCommand::DeleteFile,
        FileCommand::ListFiles,
        FileCommand::CountFiles,
        FileCommand::CheckSpace,
        FileCommand::Wait,
    ];

    /// Name as written in scripts
    pub fn name(self) -> &'static str {
        match self {
            FileCommand::MoveFile => "MoveFile",
            FileCommand::CopyFile => "CopyFile",
            FileCommand::RenameFile => "RenameFile",
            FileCommand::DeleteFile => "DeleteFile",
            FileCommand::ListFiles => "ListFiles",
            FileCommand::CountFiles => "CountFiles",
            FileCommand::CheckSpace => "CheckSpace",
            FileCommand::Wait => "Wait",
        }
    }

    /// Number of arguments the command takes
    pub fn arity(self) -> usize {
        match self {
            FileCommand::MoveFile | FileCommand::CopyFile | FileCommand::RenameFile => 2,
            _ => 1,
        }
    }

    /// Whether the command produces a value and may appear inside an expression
    pub fn is_query(self) -> bool {
        matches!(self, FileCommand::CountFiles | FileCommand::CheckSpace)
    }
}

impl fmt::Display for FileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FileCommand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileCommand::ALL
            .into_iter()
            .find(|cmd| cmd.name() == s)
            .ok_or(())
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64, SourceLocation),
    Text(String, SourceLocation),
    /// A bare word; evaluates to the bound value, or to its own name when unbound
    Variable(String, SourceLocation),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
    /// `CountFiles(...)` or `CheckSpace(...)` used for its value
    Query {
        command: FileCommand,
        args: Vec<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    /// Get the source location of this expression
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Number(_, loc) | Expr::Text(_, loc) | Expr::Variable(_, loc) => *loc,
            Expr::Binary { location, .. } | Expr::Query { location, .. } => *location,
        }
    }
}

/// `left op right`, evaluated to steer control flow
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub left: Expr,
    pub op: CompareOp,
    pub right: Expr,
    pub location: SourceLocation,
}

/// Brace-delimited statement sequence
pub type Block = Vec<Statement>;

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `var name = expr`
    VarDecl {
        name: String,
        init: Expr,
        location: SourceLocation,
    },
    /// `name = expr`
    Assign {
        name: String,
        value: Expr,
        location: SourceLocation,
    },
    If {
        condition: Condition,
        then_branch: Block,
        else_branch: Option<Block>,
        location: SourceLocation,
    },
    /// `for cond { body }`, a pre-tested loop
    For {
        condition: Condition,
        body: Block,
        location: SourceLocation,
    },
    /// File command run for its side effect; any result is discarded
    Command {
        command: FileCommand,
        args: Vec<Expr>,
        location: SourceLocation,
    },
}

impl Statement {
    /// Get the source location of this statement
    pub fn location(&self) -> SourceLocation {
        match self {
            Statement::VarDecl { location, .. }
            | Statement::Assign { location, .. }
            | Statement::If { location, .. }
            | Statement::For { location, .. }
            | Statement::Command { location, .. } => *location,
        }
    }
}

/// Top-level program structure: exactly one block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub body: Block,
}

impl Program {
    pub fn new(body: Block) -> Self {
        Program { body }
    }
}
