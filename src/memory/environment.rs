//! Variable environment
//!
//! One flat, case-sensitive name → [`Value`] table per script run. There is no
//! block scoping: a variable written inside an `if` or `for` body stays visible
//! afterwards. `var x = …` and `x = …` both upsert, replacing the previous
//! value and its type.

use super::value::Value;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Insert or overwrite `name`, returning the previous value if any
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.vars.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Forget every variable
    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// All bindings, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        let mut entries: Vec<_> = self.vars.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}
