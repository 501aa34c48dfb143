//! Error types for form inputs.

use std::collections::HashMap;
use thiserror::Error;

use crate::model::{humanize, ErrorCollection};

/// Form builder errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// The input kind has no renderer (the abstract base kind).
    #[error("input kind `{input_type}` does not implement input rendering")]
    NotImplemented { input_type: String },

    /// No input kind with this name is registered.
    #[error("unknown input type: {0}")]
    UnknownInputType(String),

    /// The bound object has no association with this name.
    #[error("unknown association: {0}")]
    UnknownAssociation(String),

    /// Configuration document could not be parsed.
    #[error("invalid form configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Collection of validation errors by attribute.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Errors keyed by attribute name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for an attribute.
    pub fn add(&mut self, attribute: &str, message: impl Into<String>) {
        self.errors
            .entry(attribute.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder method to add an error.
    #[must_use]
    pub fn with(mut self, attribute: &str, message: impl Into<String>) -> Self {
        self.add(attribute, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Returns the number of attributes with errors.
    pub fn len(&self) -> usize {
        self.errors.values().filter(|m| !m.is_empty()).count()
    }

    /// Returns errors for a specific attribute.
    pub fn get(&self, attribute: &str) -> Option<&Vec<String>> {
        self.errors.get(attribute)
    }
}

impl ErrorCollection for ValidationErrors {
    fn messages_for(&self, key: &str) -> Vec<String> {
        self.errors.get(key).cloned().unwrap_or_default()
    }

    fn full_messages_for(&self, key: &str) -> Vec<String> {
        let name = humanize(key);
        self.errors
            .get(key)
            .map(|messages| {
                messages
                    .iter()
                    .map(|message| format!("{name} {message}"))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (attribute, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{attribute}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_for_missing_key_is_empty() {
        let errors = ValidationErrors::new().with("name", "can't be blank");
        assert!(errors.messages_for("email").is_empty());
        assert_eq!(errors.messages_for("name"), vec!["can't be blank"]);
    }

    #[test]
    fn test_full_messages_are_humanized() {
        let errors = ValidationErrors::new()
            .with("address_id", "is required")
            .with("first_name", "is too short");
        assert_eq!(errors.full_messages_for("address_id"), vec!["Address is required"]);
        assert_eq!(
            errors.full_messages_for("first_name"),
            vec!["First name is too short"]
        );
    }

    #[test]
    fn test_not_implemented_message() {
        let err = FormError::NotImplemented {
            input_type: "base".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "input kind `base` does not implement input rendering"
        );
    }
}
