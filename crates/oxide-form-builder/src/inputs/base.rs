//! The input binding shared by every input kind.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::{InputClass, Widget};
use crate::builder::FormBuilder;
use crate::components::errors::ErrorAssembler;
use crate::components::{readonly, required};
use crate::error::{FormError, Result};
use crate::html::{HtmlAttributes, SafeHtml};
use crate::model::{Column, Reflection, ValidatorMeta};
use crate::options::InputOptions;
use crate::translate::Lookup;

/// Reads `{namespace}_html` out of the options and puts `extra` classes
/// in front of the caller's classes.
///
/// Used for `input`, `label`, `hint` and any other element namespace.
pub fn html_options_for(options: &InputOptions, namespace: &str, extra: &[String]) -> HtmlAttributes {
    let mut html = options
        .get(&format!("{namespace}_html"))
        .map(HtmlAttributes::from_value)
        .unwrap_or_default();
    html.prepend_classes(extra);
    html
}

/// One form field bound to a model attribute.
///
/// Options are resolved once, at construction. The input element's class
/// list stays open to additions until the attributes are read through
/// [`Input::input_html_options`].
pub struct Input<'a> {
    builder: &'a FormBuilder<'a>,
    pub(crate) attribute_name: String,
    column: Option<Column>,
    input_type: String,
    reflection: Option<Reflection>,
    pub(crate) options: InputOptions,
    required: bool,
    readonly: bool,
    input_html_classes: Vec<String>,
    pub(crate) input_html_options: HtmlAttributes,
    widget: Option<Arc<dyn Widget>>,
    errors: ErrorAssembler<'a>,
}

impl fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("attribute_name", &self.attribute_name)
            .field("input_type", &self.input_type)
            .field("column", &self.column)
            .field("reflection", &self.reflection)
            .field("options", &self.options)
            .field("required", &self.required)
            .field("input_html_classes", &self.input_html_classes)
            .field("input_html_options", &self.input_html_options)
            .finish_non_exhaustive()
    }
}

impl<'a> Input<'a> {
    /// Binds an attribute using the defaults of `class`.
    pub fn new(
        class: &InputClass,
        builder: &'a FormBuilder<'a>,
        attribute_name: &str,
        column: Option<Column>,
        input_type: &str,
        mut options: InputOptions,
    ) -> Self {
        let reflection = options.take_reflection();
        let options = options.merged_over(class.defaults());
        let object = builder.bound_object();

        let required = required::calculate(
            &options,
            object,
            attribute_name,
            reflection.as_ref(),
            builder.config().required_by_default,
        );
        let readonly = readonly::has_readonly(&options);

        let input_html_classes: Vec<String> = [
            Some(input_type),
            Some(required::required_class(required)),
            readonly::readonly_class(readonly),
        ]
        .into_iter()
        .flatten()
        .filter(|class| !class.is_empty())
        .map(str::to_string)
        .collect();

        let mut input_html_options = html_options_for(&options, "input", &[]);
        if readonly {
            input_html_options.set("readonly", true);
        }
        if options.is_truthy("autofocus") {
            input_html_options.set("autofocus", true);
        }

        let errors = ErrorAssembler::new(
            object,
            attribute_name,
            reflection.as_ref(),
            &options,
            builder.config(),
        );

        debug!(
            attribute = attribute_name,
            input_type,
            kind = class.name(),
            required,
            readonly,
            "built input"
        );

        Self {
            builder,
            attribute_name: attribute_name.to_string(),
            column,
            input_type: input_type.to_string(),
            reflection,
            options,
            required,
            readonly,
            input_html_classes,
            input_html_options,
            widget: class.widget(),
            errors,
        }
    }

    /// Renders the input element.
    ///
    /// Fails with [`FormError::NotImplemented`] when the kind has no widget.
    pub fn input(&mut self) -> Result<String> {
        let widget = self.widget.clone().ok_or_else(|| FormError::NotImplemented {
            input_type: self.input_type.clone(),
        })?;
        Ok(widget.render(self))
    }

    /// The resolved options.
    pub fn input_options(&self) -> &InputOptions {
        &self.options
    }

    /// Whether the input asked for focus.
    pub fn has_autofocus(&self) -> bool {
        self.options.is_truthy("autofocus")
    }

    /// Whether the field is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the field is read-only.
    pub fn has_readonly(&self) -> bool {
        self.readonly
    }

    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn column(&self) -> Option<&Column> {
        self.column.as_ref()
    }

    pub fn input_type(&self) -> &str {
        &self.input_type
    }

    pub fn reflection(&self) -> Option<&Reflection> {
        self.reflection.as_ref()
    }

    /// The builder this input belongs to.
    pub fn builder(&self) -> &'a FormBuilder<'a> {
        self.builder
    }

    /// Classes for the input element.
    pub fn input_html_classes(&self) -> &[String] {
        &self.input_html_classes
    }

    /// Adds a class to the input element.
    pub fn add_input_html_class(&mut self, class: impl Into<String>) {
        self.input_html_classes.push(class.into());
    }

    /// Attributes for the input element, with the current classes applied.
    ///
    /// The result is a snapshot: classes added afterwards are not in it.
    pub fn input_html_options(&self) -> HtmlAttributes {
        let mut html = self.input_html_options.clone();
        html.prepend_classes(&self.input_html_classes);
        html
    }

    /// Attributes for another element namespace, e.g. `label` or `hint`.
    pub fn html_options_for(&self, namespace: &str, extra: &[String]) -> HtmlAttributes {
        html_options_for(&self.options, namespace, extra)
    }

    /// Sets `size` to the smaller of the column limit and the configured
    /// default, unless the caller already set one.
    pub fn add_size(&mut self) {
        if self.input_html_options.contains("size") {
            return;
        }
        let size = [self.limit(), self.builder.config().default_input_size]
            .into_iter()
            .flatten()
            .min();
        if let Some(size) = size {
            self.input_html_options.set("size", size);
        }
    }

    /// The column's length limit.
    pub fn limit(&self) -> Option<usize> {
        self.column.as_ref().and_then(|column| column.limit)
    }

    /// The association name for association inputs, the attribute otherwise.
    pub fn reflection_or_attribute_name(&self) -> &str {
        self.reflection
            .as_ref()
            .map_or(self.attribute_name.as_str(), |reflection| reflection.name.as_str())
    }

    /// Validators declared on the attribute.
    pub fn attribute_validators(&self) -> &'a [ValidatorMeta] {
        self.builder
            .bound_object()
            .and_then(|object| object.validations())
            .map(|validations| validations.on(&self.attribute_name))
            .unwrap_or(&[])
    }

    /// Looks up text for a namespace such as `labels` or `hints`.
    ///
    /// Keys are tried in this order, within `forms.{namespace}`:
    ///
    /// ```text
    /// {model}.{nested}.{action}.{attribute}
    /// {model}.{nested}.{attribute}
    /// {nested}.{action}.{attribute}
    /// {nested}.{attribute}
    /// {attribute}
    /// ```
    ///
    /// then `default`. Association inputs use the association name and
    /// skip the bare attribute key. Blank results are `None`, and so is
    /// everything when translation is turned off.
    pub fn translate(&self, namespace: &str, default: &str) -> Option<String> {
        if !self.builder.config().translate {
            return None;
        }

        let name = self.reflection_or_attribute_name();
        let action = self.builder.lookup_action();
        let model_names = self.builder.lookup_model_names();

        let mut lookups = Vec::with_capacity(model_names.len() * 2 + 1);
        for start in 0..model_names.len() {
            let joined = model_names[start..].join(".");
            lookups.push(format!("{joined}.{action}.{name}"));
            lookups.push(format!("{joined}.{name}"));
        }
        if self.reflection.is_none() {
            lookups.push(self.attribute_name.clone());
        }

        let scope = format!("forms.{namespace}");
        let mut keys = lookups.into_iter();
        let Some(primary) = keys.next() else {
            return Some(default.to_string()).filter(|text| !text.trim().is_empty());
        };
        let mut defaults: Vec<Lookup> = keys.map(Lookup::Key).collect();
        defaults.push(Lookup::Text(default.to_string()));

        debug!(%scope, key = %primary, fallbacks = defaults.len(), "translating");
        self.builder
            .translator()
            .translate(&primary, &scope, &defaults)
            .filter(|text| !text.trim().is_empty())
    }

    /// The short error fragment, when the attribute has errors.
    pub fn error(&self) -> Option<SafeHtml> {
        self.errors.error()
    }

    /// The full error fragment, unless errors are switched off with `error: false`.
    pub fn full_error(&self) -> Option<SafeHtml> {
        self.errors.full_error()
    }

    /// Whether the bound object reports errors for this attribute or its association.
    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    /// The error assembly for this input.
    pub fn error_assembler(&self) -> &ErrorAssembler<'a> {
        &self.errors
    }

    /// `name` attribute for the element, e.g. `user[email]`.
    pub fn dom_name(&self) -> String {
        format!("{}[{}]", self.builder.object_name(), self.attribute_name)
    }

    /// `id` attribute for the element, e.g. `user_profile_attributes_email`.
    pub fn dom_id(&self) -> String {
        let prefix = self
            .builder
            .object_name()
            .replace("][", "_")
            .replace(['[', ']'], "_");
        format!("{}_{}", prefix.trim_end_matches('_'), self.attribute_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::inputs::InputRegistry;
    use crate::translate::{Catalog, NoTranslations};
    use serde_json::json;

    fn build<'a>(
        builder: &'a FormBuilder<'a>,
        column: Option<Column>,
        options: InputOptions,
    ) -> Input<'a> {
        let class = InputClass::base().subclass("string");
        Input::new(&class, builder, "email", column, "string", options)
    }

    #[test]
    fn test_class_list_and_flags() {
        let config = FormConfig::new();
        let registry = InputRegistry::default();
        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        let input = build(
            &builder,
            None,
            InputOptions::new()
                .with("readonly", true)
                .with("autofocus", true)
                .input_html(HtmlAttributes::new().with("class", "wide")),
        );

        let html = input.input_html_options();
        assert_eq!(html.class_list(), vec!["string", "required", "readonly", "wide"]);
        assert_eq!(html.get("readonly"), Some(&json!(true)));
        assert_eq!(html.get("autofocus"), Some(&json!(true)));
        assert!(input.has_autofocus());
    }

    #[test]
    fn test_optional_without_readonly_or_autofocus() {
        let config = FormConfig::new().required_by_default(false);
        let registry = InputRegistry::default();
        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        let input = build(&builder, None, InputOptions::new().with("readonly", "yes"));

        let html = input.input_html_options();
        assert_eq!(html.class_list(), vec!["string", "optional"]);
        assert!(html.get("readonly").is_none());
        assert!(html.get("autofocus").is_none());
    }

    #[test]
    fn test_added_classes_show_up_until_snapshot() {
        let config = FormConfig::new();
        let registry = InputRegistry::default();
        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        let mut input = build(&builder, None, InputOptions::new());

        input.add_input_html_class("email");
        let snapshot = input.input_html_options();
        input.add_input_html_class("late");

        assert_eq!(snapshot.class_list(), vec!["string", "required", "email"]);
        assert_eq!(
            input.input_html_options().class_list(),
            vec!["string", "required", "email", "late"]
        );
    }

    #[test]
    fn test_add_size() {
        let registry = InputRegistry::default();
        let config = FormConfig::new().default_input_size(Some(20));
        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);

        let mut limited = build(&builder, Some(Column::varchar("email", 10)), InputOptions::new());
        limited.add_size();
        assert_eq!(limited.input_html_options().get("size"), Some(&json!(10)));

        let mut unlimited = build(&builder, None, InputOptions::new());
        unlimited.add_size();
        assert_eq!(unlimited.input_html_options().get("size"), Some(&json!(20)));

        let mut explicit = build(
            &builder,
            Some(Column::varchar("email", 10)),
            InputOptions::new().input_html(HtmlAttributes::new().with("size", 40)),
        );
        explicit.add_size();
        assert_eq!(explicit.input_html_options().get("size"), Some(&json!(40)));

        let config = FormConfig::new().default_input_size(None);
        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        let mut none = build(&builder, None, InputOptions::new());
        none.add_size();
        assert!(none.input_html_options().get("size").is_none());
    }

    #[test]
    fn test_base_input_is_not_renderable() {
        let config = FormConfig::new();
        let registry = InputRegistry::default();
        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        let mut input = Input::new(
            &InputClass::base(),
            &builder,
            "email",
            None,
            "base",
            InputOptions::new(),
        );
        let err = input.input().unwrap_err();
        assert!(matches!(err, FormError::NotImplemented { ref input_type } if input_type == "base"));
    }

    #[test]
    fn test_translate_key_order() {
        let config = FormConfig::new();
        let registry = InputRegistry::default();
        let catalog = Catalog::new()
            .entry("forms.labels.user.email", "User e-mail")
            .entry("forms.labels.email", "E-mail");
        let builder = FormBuilder::new("user", &config, &registry, &catalog);
        let input = build(&builder, None, InputOptions::new());
        assert_eq!(input.translate("labels", "").as_deref(), Some("User e-mail"));

        let catalog = Catalog::new()
            .entry("forms.labels.user.new.email", "New e-mail")
            .entry("forms.labels.user.email", "User e-mail");
        let builder = FormBuilder::new("user", &config, &registry, &catalog);
        let input = build(&builder, None, InputOptions::new());
        assert_eq!(input.translate("labels", "").as_deref(), Some("New e-mail"));

        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        let input = build(&builder, None, InputOptions::new());
        assert_eq!(input.translate("labels", "Email").as_deref(), Some("Email"));
        assert_eq!(input.translate("labels", ""), None);
    }

    #[test]
    fn test_translate_disabled_returns_none() {
        let config = FormConfig::new().translate(false);
        let registry = InputRegistry::default();
        let catalog = Catalog::new().entry("forms.labels.email", "E-mail");
        let builder = FormBuilder::new("user", &config, &registry, &catalog);
        let input = build(&builder, None, InputOptions::new());
        assert_eq!(input.translate("labels", "Email"), None);
    }

    #[test]
    fn test_translate_association_skips_bare_attribute() {
        let config = FormConfig::new();
        let registry = InputRegistry::default();
        let catalog = Catalog::new().entry("forms.labels.address_id", "Bare key");
        let builder = FormBuilder::new("user", &config, &registry, &catalog);
        let class = InputClass::base().subclass("select");
        let input = Input::new(
            &class,
            &builder,
            "address_id",
            None,
            "select",
            InputOptions::new().reflection(Reflection::belongs_to("address")),
        );
        assert_eq!(input.reflection_or_attribute_name(), "address");
        assert_eq!(input.translate("labels", "Address").as_deref(), Some("Address"));
    }

    #[test]
    fn test_dom_name_and_id() {
        let config = FormConfig::new();
        let registry = InputRegistry::default();
        let builder = FormBuilder::new("user", &config, &registry, &NoTranslations);
        let nested = builder.nested("profile", None);
        let input = build(&nested, None, InputOptions::new());
        assert_eq!(input.dom_name(), "user[profile_attributes][email]");
        assert_eq!(input.dom_id(), "user_profile_attributes_email");
    }
}
