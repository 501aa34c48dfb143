//! `placeholder` attribute.

use crate::inputs::Input;

impl Input<'_> {
    /// Text for the placeholder: a string `placeholder` option, else the
    /// `placeholders` translation.
    pub fn placeholder_text(&self) -> Option<String> {
        match self.options.get_str("placeholder") {
            Some(text) => Some(text.to_string()),
            None => self.translate("placeholders", ""),
        }
    }

    /// Sets `placeholder` unless the component is off or one is already set.
    pub fn placeholder(&mut self) {
        if self.options.is_false("placeholder") || self.input_html_options.contains("placeholder") {
            return;
        }
        if let Some(text) = self.placeholder_text() {
            self.input_html_options.set("placeholder", text);
        }
    }
}
