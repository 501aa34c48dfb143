//! Read-only inputs.

use serde_json::Value;

use crate::options::InputOptions;

/// Whether the options mark the input read-only. Only a literal `true` counts.
pub fn has_readonly(options: &InputOptions) -> bool {
    matches!(options.get("readonly"), Some(Value::Bool(true)))
}

/// Class token for read-only inputs.
pub fn readonly_class(readonly: bool) -> Option<&'static str> {
    readonly.then_some("readonly")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_true_is_readonly() {
        assert!(has_readonly(&InputOptions::new().with("readonly", true)));
        assert!(!has_readonly(&InputOptions::new().with("readonly", "readonly")));
        assert!(!has_readonly(&InputOptions::new()));
    }

    #[test]
    fn test_readonly_class() {
        assert_eq!(readonly_class(true), Some("readonly"));
        assert_eq!(readonly_class(false), None);
    }
}
