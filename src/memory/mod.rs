//! Memory model for the filescript interpreter
//!
//! This module provides the runtime data the interpreter manipulates:
//! - [`value`]: Runtime value representation (Number, Text)
//! - [`environment`]: The flat variable table shared by a whole script run

pub mod environment;
pub mod value;
