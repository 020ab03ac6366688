//! filescript execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: [`Interpreter`](engine::Interpreter) and [`ExecOptions`](engine::ExecOptions)
//! - [`commands`]: the eight file commands and their failure tier
//! - [`errors`]: Fatal error types
//! - `expressions`, `statements`, `loops`: evaluation, split into `impl Interpreter` blocks
//!
//! # Execution Model
//!
//! The interpreter walks the AST produced by the parser. Loops re-evaluate
//! their condition node before every iteration; nothing is re-parsed at run
//! time. All variables live in one flat environment for the whole run.

pub mod commands;
pub mod constants;
pub mod engine;
pub mod errors;
mod expressions;
mod loops;
mod statements;
