//! # oxide-form-builder
//!
//! Form inputs bound to model attributes.
//!
//! This crate provides:
//! - Per-kind default options with `enable`/`disable` declarations
//! - Option resolution for one input: defaults, caller options, required,
//!   read-only and autofocus handling, size and maxlength limits
//! - Translation lookups for labels, hints and placeholders
//! - Error text assembled from the bound object's validation errors
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_form_builder::{
//!     Column, ErrorCollection, FormBuilder, FormConfig, FormObject,
//!     InputOptions, InputRegistry, NoTranslations, ValidationErrors,
//! };
//!
//! struct User {
//!     errors: ValidationErrors,
//! }
//!
//! impl FormObject for User {
//!     fn errors(&self) -> Option<&dyn ErrorCollection> {
//!         Some(&self.errors)
//!     }
//!
//!     fn column_for_attribute(&self, attribute: &str) -> Option<Column> {
//!         (attribute == "email").then(|| Column::varchar("email", 40))
//!     }
//! }
//!
//! let user = User {
//!     errors: ValidationErrors::new().with("email", "is invalid"),
//! };
//! let config = FormConfig::new().default_input_size(Some(20));
//! let registry = InputRegistry::default();
//! let form = FormBuilder::new("user", &config, &registry, &NoTranslations).object(&user);
//!
//! let mut input = form
//!     .input("email", "email", InputOptions::new().with("error_prefix", "Email"))
//!     .unwrap();
//! let html = input.input().unwrap();
//! assert!(html.contains(r#"size="20""#));
//! assert_eq!(input.error().unwrap().as_str(), "Email is invalid");
//! ```
//!
//! ## Class defaults
//!
//! ```rust
//! use oxide_form_builder::{InputClass, InputRegistry, StringInput};
//!
//! let registry = InputRegistry::default().register(
//!     InputClass::base()
//!         .subclass("slug")
//!         .enable(&["maxlength"])
//!         .disable(&["autofocus"])
//!         .renderer(StringInput),
//! );
//! let slug = registry.get("slug").unwrap();
//! assert!(slug.defaults().contains("autofocus"));
//! assert!(!slug.defaults().contains("maxlength"));
//! ```

mod builder;
pub mod components;
mod config;
mod error;
mod html;
pub mod inputs;
mod model;
mod options;
mod translate;

pub use builder::FormBuilder;
pub use components::ErrorAssembler;
pub use config::{to_sentence, ErrorExtractor, ErrorMethod, FormConfig};
pub use error::{FormError, Result, ValidationErrors};
pub use html::{html_escape, HtmlAttributes, SafeHtml};
pub use inputs::{Input, InputClass, InputRegistry, StringInput, TextInput, Widget};
pub use model::{
    humanize, AssociationKind, Column, ErrorCollection, FormObject, Reflection,
    ValidationContext, ValidatorKind, ValidatorMeta, Validations,
};
pub use options::{is_truthy, value_text, DefaultOptions, InputOptions};
pub use translate::{Catalog, Lookup, NoTranslations, Translator};
