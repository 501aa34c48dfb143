//! `maxlength` attribute.

use serde_json::Value;

use crate::inputs::Input;
use crate::model::{ValidatorKind, ValidatorMeta};
use crate::options::InputOptions;

/// Maximum length from a numeric or string `maxlength` option, else from
/// a length validator's `is` or `maximum`.
pub fn maximum_length_from_validation(
    options: &InputOptions,
    validators: &[ValidatorMeta],
) -> Option<Value> {
    match options.get("maxlength") {
        Some(value @ (Value::Number(_) | Value::String(_))) => Some(value.clone()),
        _ => validators.iter().find_map(|validator| match validator.kind {
            ValidatorKind::Length { is, maximum } => is.or(maximum).map(Value::from),
            _ => None,
        }),
    }
}

impl Input<'_> {
    /// Sets `maxlength` from the options, a length validator or the column limit.
    pub fn maxlength(&mut self) {
        if self.options.is_false("maxlength") || self.input_html_options.contains("maxlength") {
            return;
        }
        let length = maximum_length_from_validation(&self.options, self.attribute_validators())
            .or_else(|| self.limit().map(Value::from));
        if let Some(length) = length {
            self.input_html_options.set("maxlength", length);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_wins_over_validator() {
        let validators = [ValidatorMeta::max_length(30)];
        let options = InputOptions::new().with("maxlength", 12);
        assert_eq!(
            maximum_length_from_validation(&options, &validators),
            Some(json!(12))
        );
    }

    #[test]
    fn test_length_validator() {
        let validators = [ValidatorMeta::presence(), ValidatorMeta::max_length(30)];
        assert_eq!(
            maximum_length_from_validation(&InputOptions::new(), &validators),
            Some(json!(30))
        );

        let options = InputOptions::new().with("maxlength", true);
        assert_eq!(
            maximum_length_from_validation(&options, &validators),
            Some(json!(30))
        );
    }

    #[test]
    fn test_nothing_declared() {
        assert_eq!(maximum_length_from_validation(&InputOptions::new(), &[]), None);
    }
}
