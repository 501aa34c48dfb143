//! Option maps passed to form inputs.
//!
//! Option values are JSON values. `null` and `false` are falsy, everything
//! else is truthy. A key set to `false` in class defaults means the feature
//! is forced off for that input kind.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::html::HtmlAttributes;
use crate::model::Reflection;

/// Whether an option value counts as set.
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Text form of an option value; strings are returned unquoted.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Options given for a single input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputOptions {
    values: BTreeMap<String, Value>,
    reflection: Option<Reflection>,
}

impl InputOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set an option.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets the `input_html` attributes.
    #[must_use]
    pub fn input_html(self, attrs: HtmlAttributes) -> Self {
        self.with("input_html", attrs.into_value())
    }

    /// Binds the input to an association.
    #[must_use]
    pub fn reflection(mut self, reflection: Reflection) -> Self {
        self.reflection = Some(reflection);
        self
    }

    /// Sets an option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Gets an option.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Gets an option if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Whether the option is present and truthy.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(is_truthy)
    }

    /// Whether the option is exactly `false`.
    pub fn is_false(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(Value::Bool(false)))
    }

    /// Whether the option is present and not `null`.
    pub fn is_set(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(|v| !v.is_null())
    }

    /// Removes an option.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Takes the association reflection out of the options.
    pub fn take_reflection(&mut self) -> Option<Reflection> {
        self.reflection.take()
    }

    /// Iterates over the options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Layers these options over class defaults. Keys set here win.
    #[must_use]
    pub fn merged_over(self, defaults: &DefaultOptions) -> Self {
        let mut values = defaults.to_map();
        values.extend(self.values);
        Self {
            values,
            reflection: self.reflection,
        }
    }
}

/// Per-kind default options.
///
/// `enable` and `disable` never touch a map another kind can see: each
/// call builds a new map and swaps it in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultOptions {
    values: Arc<BTreeMap<String, Value>>,
}

impl DefaultOptions {
    /// Creates empty defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the keys, restoring framework behavior for them.
    #[must_use]
    pub fn enable(&self, keys: &[&str]) -> Self {
        let mut values = (*self.values).clone();
        for key in keys {
            values.remove(*key);
        }
        Self {
            values: Arc::new(values),
        }
    }

    /// Forces the keys off.
    #[must_use]
    pub fn disable(&self, keys: &[&str]) -> Self {
        let mut values = (*self.values).clone();
        for key in keys {
            values.insert((*key).to_string(), Value::Bool(false));
        }
        Self {
            values: Arc::new(values),
        }
    }

    /// Gets a default.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Whether the key has a default.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns whether no defaults are declared.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn to_map(&self) -> BTreeMap<String, Value> {
        (*self.values).clone()
    }
}
