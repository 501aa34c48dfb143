//! Process-wide form configuration.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// Extracts display text from an attribute's error messages.
pub type ErrorExtractor = fn(&[String]) -> Option<String>;

/// How the error text is pulled out of an attribute's messages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorMethod {
    /// The first message only.
    #[default]
    First,
    /// All messages joined as a sentence: `a, b, and c`.
    ToSentence,
    /// A method registered in [`FormConfig::error_methods`].
    Custom(String),
}

impl From<&str> for ErrorMethod {
    fn from(name: &str) -> Self {
        match name {
            "first" => Self::First,
            "to_sentence" => Self::ToSentence,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for ErrorMethod {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<ErrorMethod> for String {
    fn from(method: ErrorMethod) -> Self {
        method.to_string()
    }
}

impl fmt::Display for ErrorMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::ToSentence => f.write_str("to_sentence"),
            Self::Custom(name) => f.write_str(name),
        }
    }
}

/// Configuration shared by every form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Default error extraction method.
    pub error_method: ErrorMethod,
    /// Whether labels, hints and placeholders are looked up in translations.
    pub translate: bool,
    /// Default `size` for text inputs.
    pub default_input_size: Option<usize>,
    /// Whether inputs are required when nothing else decides.
    pub required_by_default: bool,
    /// Custom error extraction methods by name.
    #[serde(skip)]
    pub error_methods: HashMap<String, ErrorExtractor>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            error_method: ErrorMethod::First,
            translate: true,
            default_input_size: Some(50),
            required_by_default: true,
            error_methods: HashMap::new(),
        }
    }
}

impl FormConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the default error method.
    #[must_use]
    pub fn error_method(mut self, method: impl Into<ErrorMethod>) -> Self {
        self.error_method = method.into();
        self
    }

    /// Enables or disables translation lookups.
    #[must_use]
    pub fn translate(mut self, enabled: bool) -> Self {
        self.translate = enabled;
        self
    }

    /// Sets the default input size.
    #[must_use]
    pub fn default_input_size(mut self, size: Option<usize>) -> Self {
        self.default_input_size = size;
        self
    }

    /// Sets the required policy.
    #[must_use]
    pub fn required_by_default(mut self, required: bool) -> Self {
        self.required_by_default = required;
        self
    }

    /// Registers a custom error extraction method.
    #[must_use]
    pub fn register_error_method(mut self, name: &str, extractor: ErrorExtractor) -> Self {
        self.error_methods.insert(name.to_string(), extractor);
        self
    }

    /// Applies an error method to a list of messages.
    pub fn extract_errors(&self, method: &ErrorMethod, messages: &[String]) -> Option<String> {
        match method {
            ErrorMethod::First => messages.first().cloned(),
            ErrorMethod::ToSentence => Some(to_sentence(messages)),
            ErrorMethod::Custom(name) => match self.error_methods.get(name) {
                Some(extractor) => extractor(messages),
                None => {
                    warn!(method = %name, "error method not registered, using first");
                    messages.first().cloned()
                }
            },
        }
    }
}

/// Joins words as an English sentence.
pub fn to_sentence(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_to_sentence() {
        assert_eq!(to_sentence(&[]), "");
        assert_eq!(to_sentence(&messages(&["a"])), "a");
        assert_eq!(to_sentence(&messages(&["a", "b"])), "a and b");
        assert_eq!(to_sentence(&messages(&["a", "b", "c"])), "a, b, and c");
    }

    #[test]
    fn test_error_method_names() {
        assert_eq!(ErrorMethod::from("first"), ErrorMethod::First);
        assert_eq!(ErrorMethod::from("to_sentence"), ErrorMethod::ToSentence);
        assert_eq!(
            ErrorMethod::from("last"),
            ErrorMethod::Custom("last".to_string())
        );
    }

    #[test]
    fn test_custom_error_method() {
        let config = FormConfig::new().register_error_method("last", |m| m.last().cloned());
        let list = messages(&["is too short", "is invalid"]);

        let last = ErrorMethod::from("last");
        assert_eq!(config.extract_errors(&last, &list).as_deref(), Some("is invalid"));

        let missing = ErrorMethod::from("unknown");
        assert_eq!(
            config.extract_errors(&missing, &list).as_deref(),
            Some("is too short")
        );
    }

    #[test]
    fn test_from_json_keeps_defaults() {
        let config = FormConfig::from_json(
            r#"{"error_method": "to_sentence", "default_input_size": null}"#,
        )
        .unwrap();
        assert_eq!(config.error_method, ErrorMethod::ToSentence);
        assert_eq!(config.default_input_size, None);
        assert!(config.translate);
        assert!(config.required_by_default);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(FormConfig::from_json("{not json").is_err());
    }
}
