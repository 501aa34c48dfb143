//! Hint text.

use crate::inputs::Input;

impl Input<'_> {
    /// A string `hint` option, nothing when `hint` is `false`, else the
    /// `hints` translation.
    pub fn hint(&self) -> Option<String> {
        if self.options.is_false("hint") {
            return None;
        }
        match self.options.get_str("hint") {
            Some(text) => Some(text.to_string()),
            None => self.translate("hints", ""),
        }
    }
}
