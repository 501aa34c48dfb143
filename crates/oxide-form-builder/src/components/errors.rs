//! Error text for an input.
//!
//! Messages come from the bound object's errors on the attribute and, for
//! association inputs, on the association name. A non-false `error`
//! option replaces them with literal text.

use std::cell::OnceCell;

use crate::config::{ErrorMethod, FormConfig};
use crate::html::{html_escape, SafeHtml};
use crate::model::{ErrorCollection, FormObject, Reflection};
use crate::options::{is_truthy, value_text, InputOptions};

/// Assembles the error fragments of one input.
pub struct ErrorAssembler<'a> {
    object: Option<&'a dyn FormObject>,
    attribute_name: String,
    association_name: Option<String>,
    error_override: Option<String>,
    error_disabled: bool,
    prefix: String,
    error_method: ErrorMethod,
    config: &'a FormConfig,
    errors: OnceCell<Vec<String>>,
    full_errors: OnceCell<Vec<String>>,
}

impl std::fmt::Debug for ErrorAssembler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorAssembler")
            .field("attribute_name", &self.attribute_name)
            .field("association_name", &self.association_name)
            .field("error_override", &self.error_override)
            .field("error_disabled", &self.error_disabled)
            .field("error_method", &self.error_method)
            .finish_non_exhaustive()
    }
}

impl<'a> ErrorAssembler<'a> {
    /// Captures what error assembly needs from the resolved options.
    pub fn new(
        object: Option<&'a dyn FormObject>,
        attribute_name: &str,
        reflection: Option<&Reflection>,
        options: &InputOptions,
        config: &'a FormConfig,
    ) -> Self {
        let error_override = options
            .get("error")
            .filter(|value| !value.is_null() && is_truthy(value))
            .map(value_text);
        let error_method = options
            .get("error_method")
            .filter(|value| is_truthy(value))
            .map_or_else(|| config.error_method.clone(), |value| ErrorMethod::from(value_text(value)));

        Self {
            object,
            attribute_name: attribute_name.to_string(),
            association_name: reflection.map(|reflection| reflection.name.clone()),
            error_override,
            error_disabled: options.is_false("error"),
            prefix: options.get("error_prefix").map(value_text).unwrap_or_default(),
            error_method,
            config,
            errors: OnceCell::new(),
            full_errors: OnceCell::new(),
        }
    }

    /// The short error fragment: escaped prefix, a space, the error text.
    pub fn error(&self) -> Option<SafeHtml> {
        self.has_errors().then(|| self.error_text())
    }

    /// The full error fragment, unless the `error` option is `false`.
    pub fn full_error(&self) -> Option<SafeHtml> {
        (!self.error_disabled && self.has_errors()).then(|| self.full_error_text())
    }

    /// Whether the object can report errors and has some for this input.
    pub fn has_errors(&self) -> bool {
        self.collection().is_some() && !self.errors().is_empty()
    }

    /// Whether the `error` option supplies the text.
    pub fn has_error_in_options(&self) -> bool {
        self.error_override.is_some()
    }

    /// The extraction method: the `error_method` option or the configured default.
    pub fn error_method(&self) -> &ErrorMethod {
        &self.error_method
    }

    /// Messages on the attribute followed by messages on the association.
    pub fn errors(&self) -> &[String] {
        self.errors
            .get_or_init(|| self.gather(|errors, key| errors.messages_for(key)))
    }

    /// Full messages on the attribute followed by those on the association.
    pub fn full_errors(&self) -> &[String] {
        self.full_errors
            .get_or_init(|| self.gather(|errors, key| errors.full_messages_for(key)))
    }

    fn error_text(&self) -> SafeHtml {
        let text = self.text_from(self.errors());
        let fragment = format!("{} {text}", html_escape(&self.prefix));
        SafeHtml::from_trusted(fragment.trim_start())
    }

    fn full_error_text(&self) -> SafeHtml {
        SafeHtml::from_trusted(self.text_from(self.full_errors()))
    }

    fn text_from(&self, messages: &[String]) -> String {
        match &self.error_override {
            Some(text) => text.clone(),
            None => self
                .config
                .extract_errors(&self.error_method, messages)
                .unwrap_or_default(),
        }
    }

    fn collection(&self) -> Option<&'a dyn ErrorCollection> {
        self.object.and_then(|object| object.errors())
    }

    fn gather(&self, query: impl Fn(&dyn ErrorCollection, &str) -> Vec<String>) -> Vec<String> {
        let Some(collection) = self.collection() else {
            return Vec::new();
        };
        let mut messages = query(collection, &self.attribute_name);
        if let Some(association) = &self.association_name {
            messages.extend(query(collection, association));
        }
        messages
    }
}
