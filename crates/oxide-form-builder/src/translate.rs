//! Translation lookup contract.

use std::collections::HashMap;

/// A fallback entry for a translation lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Another key to try, relative to the scope.
    Key(String),
    /// Literal text returned as-is.
    Text(String),
}

/// Translation backend.
pub trait Translator {
    /// Resolves `key` within `scope`, trying `defaults` in order when the
    /// key is missing. Returns `None` when nothing resolves.
    fn translate(&self, key: &str, scope: &str, defaults: &[Lookup]) -> Option<String>;
}

/// A translator that never finds anything; every lookup ends at its literal default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Translator for NoTranslations {
    fn translate(&self, _key: &str, _scope: &str, defaults: &[Lookup]) -> Option<String> {
        defaults.iter().find_map(|lookup| match lookup {
            Lookup::Key(_) => None,
            Lookup::Text(text) => Some(text.clone()),
        })
    }
}

/// In-memory translation catalog keyed by fully qualified keys,
/// e.g. `forms.labels.user.email`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    #[must_use]
    pub fn entry(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    fn find(&self, scope: &str, key: &str) -> Option<String> {
        self.entries
            .get(&format!("{scope}.{key}"))
            .filter(|text| !text.trim().is_empty())
            .cloned()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str, scope: &str, defaults: &[Lookup]) -> Option<String> {
        self.find(scope, key).or_else(|| {
            defaults.iter().find_map(|lookup| match lookup {
                Lookup::Key(key) => self.find(scope, key),
                Lookup::Text(text) => Some(text.clone()),
            })
        })
    }
}
