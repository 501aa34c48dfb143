//! `pattern` attribute.

use crate::inputs::Input;
use crate::model::{ValidatorKind, ValidatorMeta};
use crate::options::InputOptions;

/// A string `pattern` option, else the regex source of a format validator.
pub fn pattern_source(options: &InputOptions, validators: &[ValidatorMeta]) -> Option<String> {
    if let Some(pattern) = options.get_str("pattern") {
        return Some(pattern.to_string());
    }
    validators.iter().find_map(|validator| match &validator.kind {
        ValidatorKind::Format { with } if !validator.conditional => Some(with.as_str().to_string()),
        _ => None,
    })
}

impl Input<'_> {
    /// Sets `pattern` from the options or a format validator.
    pub fn pattern(&mut self) {
        if self.options.is_false("pattern") || self.input_html_options.contains("pattern") {
            return;
        }
        if let Some(source) = pattern_source(&self.options, self.attribute_validators()) {
            self.input_html_options.set("pattern", source);
        }
    }
}
