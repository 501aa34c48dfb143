//! Form builder: the bound object and lookup context shared by a form's inputs.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::inputs::{Input, InputRegistry};
use crate::model::FormObject;
use crate::options::InputOptions;
use crate::translate::Translator;

fn model_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[a-zA-Z_]+").expect("valid model name pattern"))
}

/// Builds inputs for one form.
pub struct FormBuilder<'a> {
    object: Option<&'a dyn FormObject>,
    object_name: String,
    action: String,
    config: &'a FormConfig,
    registry: &'a InputRegistry,
    translator: &'a dyn Translator,
}

impl fmt::Debug for FormBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBuilder")
            .field("object_name", &self.object_name)
            .field("action", &self.action)
            .field("has_object", &self.object.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> FormBuilder<'a> {
    /// Creates a builder for an object name such as `user`.
    pub fn new(
        object_name: impl Into<String>,
        config: &'a FormConfig,
        registry: &'a InputRegistry,
        translator: &'a dyn Translator,
    ) -> Self {
        Self {
            object: None,
            object_name: object_name.into(),
            action: "new".to_string(),
            config,
            registry,
            translator,
        }
    }

    /// Binds the form to an object.
    #[must_use]
    pub fn object(mut self, object: &'a dyn FormObject) -> Self {
        self.object = Some(object);
        self
    }

    /// Sets the controller action being rendered.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Creates a builder for nested attributes of an association.
    pub fn nested(&self, association: &str, object: Option<&'a dyn FormObject>) -> Self {
        Self {
            object,
            object_name: format!("{}[{association}_attributes]", self.object_name),
            action: self.action.clone(),
            config: self.config,
            registry: self.registry,
            translator: self.translator,
        }
    }

    /// The bound object.
    pub fn bound_object(&self) -> Option<&'a dyn FormObject> {
        self.object
    }

    /// The object name, e.g. `user[profile_attributes]`.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Model names used for translation lookups, outermost first.
    ///
    /// `user[profile_attributes]` gives `["user", "profile"]`.
    pub fn lookup_model_names(&self) -> Vec<String> {
        model_name_pattern()
            .find_iter(&self.object_name)
            .map(|m| m.as_str().replace("_attributes", ""))
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Action used for translation lookups; `create` reads as `new`,
    /// `update` as `edit`.
    pub fn lookup_action(&self) -> &str {
        match self.action.as_str() {
            "create" => "new",
            "update" => "edit",
            other => other,
        }
    }

    /// The form configuration.
    pub fn config(&self) -> &'a FormConfig {
        self.config
    }

    /// The translation backend.
    pub fn translator(&self) -> &'a dyn Translator {
        self.translator
    }

    /// Builds an input for an attribute.
    pub fn input(
        &'a self,
        attribute_name: &str,
        input_type: &str,
        options: InputOptions,
    ) -> Result<Input<'a>> {
        let class = self
            .registry
            .get(input_type)
            .ok_or_else(|| FormError::UnknownInputType(input_type.to_string()))?;
        let column = self
            .object
            .and_then(|object| object.column_for_attribute(attribute_name));
        Ok(Input::new(
            class,
            self,
            attribute_name,
            column,
            input_type,
            options,
        ))
    }

    /// Builds an input for an association, bound to its foreign key.
    pub fn association(
        &'a self,
        name: &str,
        input_type: &str,
        options: InputOptions,
    ) -> Result<Input<'a>> {
        let reflection = self
            .object
            .and_then(|object| object.reflect_on_association(name))
            .ok_or_else(|| FormError::UnknownAssociation(name.to_string()))?;
        let attribute_name = reflection.foreign_key.clone();
        self.input(&attribute_name, input_type, options.reflection(reflection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::NoTranslations;

    #[test]
    fn test_lookup_model_names() {
        let config = FormConfig::new();
        let registry = InputRegistry::default();
        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        assert_eq!(builder.lookup_model_names(), vec!["user"]);

        let nested = builder.nested("profile", None);
        assert_eq!(nested.object_name(), "user[profile_attributes]");
        assert_eq!(nested.lookup_model_names(), vec!["user", "profile"]);

        let indexed = FormBuilder::new(
            "user[addresses_attributes][0]",
            &config,
            &registry,
            &NoTranslations,
        );
        assert_eq!(indexed.lookup_model_names(), vec!["user", "addresses"]);
    }

    #[test]
    fn test_lookup_action() {
        let config = FormConfig::new();
        let registry = InputRegistry::default();
        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        assert_eq!(builder.lookup_action(), "new");
        assert_eq!(builder.nested("x", None).action("create").lookup_action(), "new");

        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        assert_eq!(builder.action("update").lookup_action(), "edit");
    }

    #[test]
    fn test_unknown_input_type() {
        let config = FormConfig::new();
        let registry = InputRegistry::default();
        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        let err = builder
            .input("email", "colorwheel", InputOptions::new())
            .unwrap_err();
        assert!(matches!(err, FormError::UnknownInputType(ref t) if t == "colorwheel"));
    }

    #[test]
    fn test_unknown_association_without_object() {
        let config = FormConfig::new();
        let registry = InputRegistry::default();
        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        let err = builder
            .association("address", "string", InputOptions::new())
            .unwrap_err();
        assert!(matches!(err, FormError::UnknownAssociation(_)));
    }
}
