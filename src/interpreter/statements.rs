//! Conditional statement execution
//!
//! The condition is evaluated once. Exactly one branch runs; the other is a
//! subtree that is never visited, so its commands never fire.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::{Condition, Statement};

impl Interpreter {
    pub(crate) fn execute_if(
        &mut self,
        condition: &Condition,
        then_branch: &[Statement],
        else_branch: Option<&[Statement]>,
    ) -> Result<(), RuntimeError> {
        if self.evaluate_condition(condition)? {
            self.execute_block(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.execute_block(else_branch)
        } else {
            Ok(())
        }
    }
}
