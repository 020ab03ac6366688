//! Runtime value representation
//!
//! Script values are either numbers or text. There is no boolean value:
//! conditions evaluate to a Rust `bool` that only steers control flow.
//!
//! # Value Types
//!
//! - [`Value::Number`]: IEEE double; literals are integers, arithmetic may not be
//! - [`Value::Text`]: a string
//!
//! Wherever text is needed (concatenation, mixed comparisons, paths passed to
//! file commands) a number uses its natural decimal form: `5.0` is written `5`.

use std::fmt;

/// Runtime values in the interpreter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Get the number, returns None if not a Number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Get the text, returns None if not Text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    /// String form used for concatenation, comparison and paths
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => format_number(*n, f),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// `f64` Display already drops a zero fraction (`5`), keeps others (`2.5`),
/// and never switches to exponent notation. Negative zero prints as `0`.
fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{}", n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
