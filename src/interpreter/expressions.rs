//! Expression and condition evaluation
//!
//! # Coercion rules
//!
//! - `+`: Number + Number adds; any Text operand concatenates the string
//!   forms of both sides (`"a" + 1` is `"a1"`).
//! - `-`: Number - Number subtracts; a Text operand is a fatal error.
//! - Comparisons: numeric when both sides are Numbers, otherwise on the string
//!   forms (`==`/`!=` by equality, `<`/`>` lexicographically).
//! - A bare word that names no variable evaluates to its own text.

use crate::interpreter::constants::QUERY_FALLBACK;
use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::memory::value::Value;
use crate::parser::ast::*;
use std::cmp::Ordering;

impl Interpreter {
    pub(crate) fn evaluate_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Number(n, _) => Ok(Value::Number(*n)),

            Expr::Text(s, _) => Ok(Value::Text(s.clone())),

            Expr::Variable(name, _) => Ok(self
                .env
                .get(name)
                .cloned()
                .unwrap_or_else(|| Value::Text(name.clone()))),

            Expr::Binary {
                op,
                left,
                right,
                location,
            } => {
                let left = self.evaluate_expr(left)?;
                let right = self.evaluate_expr(right)?;
                apply_binary(*op, left, right, *location)
            }

            Expr::Query {
                command,
                args,
                location,
            } => Ok(self
                .execute_command(*command, args, *location)?
                .unwrap_or(Value::Number(QUERY_FALLBACK))),
        }
    }

    pub(crate) fn evaluate_condition(&mut self, condition: &Condition) -> Result<bool, RuntimeError> {
        let left = self.evaluate_expr(&condition.left)?;
        let right = self.evaluate_expr(&condition.right)?;
        let result = compare(condition.op, &left, &right);

        tracing::trace!(%left, op = %condition.op, %right, result, "condition");
        Ok(result)
    }
}

fn apply_binary(op: BinOp, left: Value, right: Value, location: SourceLocation) -> Result<Value, RuntimeError> {
    match (op, left, right) {
        (BinOp::Add, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (BinOp::Add, left, right) => {
            let mut joined = left.to_text();
            joined.push_str(&right.to_text());
            Ok(Value::Text(joined))
        }
        (BinOp::Sub, Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
        (BinOp::Sub, left, right) => Err(RuntimeError::InvalidSubtraction {
            left: describe(&left),
            right: describe(&right),
            location,
        }),
    }
}

/// Compare two values under `op`
pub(crate) fn compare(op: CompareOp, left: &Value, right: &Value) -> bool {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        _ => Some(left.to_text().cmp(&right.to_text())),
    };

    // NaN compares unequal to everything
    match op {
        CompareOp::Eq => ordering == Some(Ordering::Equal),
        CompareOp::Ne => ordering != Some(Ordering::Equal),
        CompareOp::Gt => ordering == Some(Ordering::Greater),
        CompareOp::Lt => ordering == Some(Ordering::Less),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Number(_) => format!("Number {}", value),
        Value::Text(s) => format!("Text \"{}\"", s),
    }
}
