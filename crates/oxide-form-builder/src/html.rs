//! HTML attribute maps and escaping.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::options::value_text;

/// Attributes for one HTML element.
///
/// Values are JSON values so that boolean attributes (`readonly`,
/// `autofocus`), numeric ones (`size`) and class lists share one map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlAttributes {
    /// HTML attributes, ordered by name.
    pub attrs: BTreeMap<String, Value>,
}

impl HtmlAttributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Reads attributes out of an option value; anything but an object is empty.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                attrs: map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            },
            _ => Self::new(),
        }
    }

    /// Converts the attributes into an option value.
    pub fn into_value(self) -> Value {
        Value::Object(self.attrs.into_iter().collect())
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// Whether the attribute is set to something other than `null`.
    pub fn contains(&self, key: &str) -> bool {
        self.attrs.get(key).is_some_and(|v| !v.is_null())
    }

    /// Removes an attribute.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.attrs.remove(key)
    }

    /// Returns whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the `class` attribute as a flat list of class names.
    pub fn class_list(&self) -> Vec<String> {
        match self.attrs.get("class") {
            Some(Value::Array(items)) => items
                .iter()
                .filter(|v| !v.is_null())
                .map(value_text)
                .filter(|s| !s.is_empty())
                .collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => value_text(other)
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Puts `extra` in front of the existing classes. Empty `extra` leaves
    /// the `class` attribute untouched.
    pub fn prepend_classes(&mut self, extra: &[String]) {
        if extra.is_empty() {
            return;
        }
        let mut classes = extra.to_vec();
        classes.extend(self.class_list());
        self.set("class", classes);
    }

    /// Renders attributes as an HTML attribute string.
    ///
    /// `true` renders as `name="name"`; `false` and `null` are omitted.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .filter_map(|(k, v)| match v {
                Value::Null | Value::Bool(false) => None,
                Value::Bool(true) => Some(format!(r#"{k}="{k}""#)),
                Value::Array(_) if k == "class" => {
                    Some(format!(r#"class="{}""#, html_escape(&self.class_list().join(" "))))
                }
                other => Some(format!(r#"{k}="{}""#, html_escape(&value_text(other)))),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A string that is already escaped and can be embedded as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Marks a string as safe without escaping it.
    pub fn from_trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escapes a string and marks the result as safe.
    pub fn escape(text: &str) -> Self {
        Self(html_escape(text))
    }

    /// Returns the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the markup, consuming self.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SafeHtml> for String {
    fn from(html: SafeHtml) -> Self {
        html.0
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
