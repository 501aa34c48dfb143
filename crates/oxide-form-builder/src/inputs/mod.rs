//! Input kinds and their class defaults.
//!
//! Every input kind is described by an [`InputClass`]: a name, the default
//! options its inputs start from, and the widget that renders it. Kinds
//! derive from each other by copying the parent's record and overriding
//! it, so changing a child never reaches its parent or siblings.

mod base;
mod string;

pub use base::{html_options_for, Input};
pub use string::{StringInput, TextInput};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::options::DefaultOptions;

/// Trait for widgets that render an input element.
pub trait Widget: Send + Sync {
    /// Renders the input as HTML.
    ///
    /// Widgets may add attributes (size, maxlength, ...) before rendering.
    fn render(&self, input: &mut Input<'_>) -> String;
}

/// Declarative description of an input kind.
#[derive(Clone)]
pub struct InputClass {
    name: String,
    parent: Option<String>,
    defaults: DefaultOptions,
    renderer: Option<Arc<dyn Widget>>,
}

impl fmt::Debug for InputClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputClass")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("defaults", &self.defaults)
            .field("renderable", &self.renderer.is_some())
            .finish()
    }
}

impl InputClass {
    /// The root kind. It has no renderer and turns off the
    /// `maxlength`, `placeholder` and `pattern` components.
    pub fn base() -> Self {
        Self {
            name: "base".to_string(),
            parent: None,
            defaults: DefaultOptions::new(),
            renderer: None,
        }
        .disable(&["maxlength", "placeholder", "pattern"])
    }

    /// Derives a new kind from this one.
    pub fn subclass(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(self.name.clone()),
            defaults: self.defaults.clone(),
            renderer: self.renderer.clone(),
        }
    }

    /// Drops the keys from this kind's defaults.
    #[must_use]
    pub fn enable(mut self, keys: &[&str]) -> Self {
        debug!(input = %self.name, ?keys, "enabling input defaults");
        self.defaults = self.defaults.enable(keys);
        self
    }

    /// Forces the keys off for this kind.
    #[must_use]
    pub fn disable(mut self, keys: &[&str]) -> Self {
        debug!(input = %self.name, ?keys, "disabling input defaults");
        self.defaults = self.defaults.disable(keys);
        self
    }

    /// Sets the widget that renders this kind.
    #[must_use]
    pub fn renderer(mut self, widget: impl Widget + 'static) -> Self {
        self.renderer = Some(Arc::new(widget));
        self
    }

    /// The kind's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the kind this one was derived from.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// The kind's default options.
    pub fn defaults(&self) -> &DefaultOptions {
        &self.defaults
    }

    pub(crate) fn widget(&self) -> Option<Arc<dyn Widget>> {
        self.renderer.clone()
    }
}

/// Input kinds by name.
#[derive(Debug, Clone)]
pub struct InputRegistry {
    classes: HashMap<String, InputClass>,
}

impl Default for InputRegistry {
    fn default() -> Self {
        let base = InputClass::base();
        let string = base
            .subclass("string")
            .enable(&["placeholder", "maxlength", "pattern"])
            .renderer(StringInput);
        let text = base
            .subclass("text")
            .enable(&["placeholder", "maxlength"])
            .renderer(TextInput);

        let mut registry = Self::new().register(base);
        for kind in ["email", "password", "search", "tel", "url"] {
            registry = registry.register(string.subclass(kind));
        }
        registry.register(string).register(text)
    }
}

impl InputRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Registers a kind, replacing any kind with the same name.
    #[must_use]
    pub fn register(mut self, class: InputClass) -> Self {
        debug!(input = %class.name, parent = ?class.parent, "registering input kind");
        self.classes.insert(class.name.clone(), class);
        self
    }

    /// Looks up a kind.
    pub fn get(&self, name: &str) -> Option<&InputClass> {
        self.classes.get(name)
    }

    /// Returns the number of registered kinds.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns whether no kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
