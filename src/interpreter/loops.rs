//! Loop statement execution (`for`).
//!
//! `for cond { body }` is a pre-tested loop: the condition is re-evaluated from
//! its tree node before every iteration and the body runs while it holds.
//! Variables are global, so the body updates what the condition reads.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::parser::ast::{Condition, SourceLocation, Statement};

impl Interpreter {
    /// Executes a `for condition { body }` loop.
    ///
    /// With `max_loop_iterations` set, a loop that wants to start one more
    /// iteration past the limit fails with [`RuntimeError::LoopLimitExceeded`].
    pub(crate) fn execute_for(
        &mut self,
        condition: &Condition,
        body: &[Statement],
        location: SourceLocation,
    ) -> Result<(), RuntimeError> {
        let mut iterations: u64 = 0;

        while self.evaluate_condition(condition)? {
            if let Some(limit) = self.options.max_loop_iterations {
                if iterations >= limit {
                    tracing::warn!(limit, line = location.line, "loop limit reached");
                    return Err(RuntimeError::LoopLimitExceeded { limit, location });
                }
            }

            iterations += 1;
            self.execute_block(body)?;
        }

        tracing::debug!(iterations, line = location.line, "loop finished");
        Ok(())
    }
}
