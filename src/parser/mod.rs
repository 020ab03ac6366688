//! filescript source parser
//!
//! This module transforms script text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser struct, helpers and entry point (tokens → AST)
//! - `statements`, `expressions`: the grammar, as `impl Parser` blocks
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! A script is one brace-delimited block. Statements are `var` declarations,
//! plain assignments, `if`/`else`, `for` loops, and calls to the eight built-in
//! file commands. Expressions combine string literals, integer literals, bare
//! words and the `CountFiles`/`CheckSpace` queries with `+` and `-`.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser. No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
