//! Required-ness of an input.

use crate::model::{FormObject, Reflection, ValidatorKind, Validations};
use crate::options::{is_truthy, InputOptions};

/// Decides whether an input is required.
///
/// An explicit, non-null `required` option wins. Otherwise, if the object
/// declares validators, the input is required when an applicable presence
/// validator exists on the attribute or its association. Otherwise
/// `by_default` decides.
pub fn calculate(
    options: &InputOptions,
    object: Option<&dyn FormObject>,
    attribute_name: &str,
    reflection: Option<&Reflection>,
    by_default: bool,
) -> bool {
    if let Some(explicit) = options.get("required").filter(|value| !value.is_null()) {
        return is_truthy(explicit);
    }

    match object.and_then(|object| object.validations().map(|v| (object, v))) {
        Some((object, validations)) => required_by_validators(
            validations,
            attribute_name,
            reflection,
            object.is_persisted(),
        ),
        None => by_default,
    }
}

/// Whether an applicable presence validator is declared on the attribute
/// or the association.
pub fn required_by_validators(
    validations: &Validations,
    attribute_name: &str,
    reflection: Option<&Reflection>,
    persisted: bool,
) -> bool {
    let on_association = reflection.map_or(&[][..], |reflection| validations.on(&reflection.name));
    validations
        .on(attribute_name)
        .iter()
        .chain(on_association)
        .any(|validator| matches!(validator.kind, ValidatorKind::Presence) && validator.applies(persisted))
}

/// Class token for the input's required state.
pub fn required_class(required: bool) -> &'static str {
    if required {
        "required"
    } else {
        "optional"
    }
}
