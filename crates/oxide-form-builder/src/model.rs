//! Model metadata consumed by form inputs.
//!
//! A form is bound to an object implementing [`FormObject`]. Every
//! capability on that trait is optional: an object that exposes no errors
//! query simply has no errors, an object without validator metadata falls
//! back to the configured required policy.

use std::collections::HashMap;

use regex::Regex;

/// An object a form is bound to.
pub trait FormObject {
    /// Returns the validation errors, if the object can be validated.
    fn errors(&self) -> Option<&dyn ErrorCollection> {
        None
    }

    /// Returns validator metadata, if the object's type declares any.
    fn validations(&self) -> Option<&Validations> {
        None
    }

    /// Returns storage metadata for an attribute.
    fn column_for_attribute(&self, _attribute: &str) -> Option<Column> {
        None
    }

    /// Returns the association with the given name.
    fn reflect_on_association(&self, _name: &str) -> Option<Reflection> {
        None
    }

    /// Whether the object has already been saved.
    fn is_persisted(&self) -> bool {
        false
    }
}

/// Query interface over an object's validation errors.
pub trait ErrorCollection {
    /// Returns the messages recorded for an attribute or association.
    fn messages_for(&self, key: &str) -> Vec<String>;

    /// Returns the messages for a key, prefixed with its human name.
    fn full_messages_for(&self, key: &str) -> Vec<String>;
}

/// Storage metadata for an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// SQL type, e.g. `VARCHAR`.
    pub sql_type: String,
    /// Declared length limit.
    pub limit: Option<usize>,
}

impl Column {
    /// Creates a column without a length limit.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            limit: None,
        }
    }

    /// Creates a `VARCHAR(limit)` column.
    pub fn varchar(name: impl Into<String>, limit: usize) -> Self {
        Self::new(name, "VARCHAR").limit(limit)
    }

    /// Sets the length limit.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Kind of association between two models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    BelongsTo,
    HasOne,
    HasMany,
    HasAndBelongsToMany,
}

impl AssociationKind {
    /// Whether the association holds many records.
    pub fn is_collection(self) -> bool {
        matches!(self, Self::HasMany | Self::HasAndBelongsToMany)
    }
}

/// Metadata describing an association between two models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflection {
    /// Association name, e.g. `address`.
    pub name: String,
    /// Association kind.
    pub kind: AssociationKind,
    /// Attribute the form input binds to, e.g. `address_id`.
    pub foreign_key: String,
}

impl Reflection {
    /// Creates a reflection with the conventional foreign key for its kind.
    pub fn new(name: impl Into<String>, kind: AssociationKind) -> Self {
        let name = name.into();
        let foreign_key = if kind.is_collection() {
            format!("{}_ids", singularize(&name))
        } else {
            format!("{name}_id")
        };
        Self {
            name,
            kind,
            foreign_key,
        }
    }

    /// Creates a `belongs_to` reflection.
    pub fn belongs_to(name: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::BelongsTo)
    }

    /// Creates a `has_many` reflection.
    pub fn has_many(name: impl Into<String>) -> Self {
        Self::new(name, AssociationKind::HasMany)
    }

    /// Overrides the foreign key.
    #[must_use]
    pub fn foreign_key(mut self, key: impl Into<String>) -> Self {
        self.foreign_key = key.into();
        self
    }
}

/// Validation context a validator is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationContext {
    Save,
    Create,
    Update,
}

/// The kind of a declared validator.
#[derive(Debug, Clone)]
pub enum ValidatorKind {
    Presence,
    Length {
        is: Option<usize>,
        maximum: Option<usize>,
    },
    Format {
        with: Regex,
    },
    Other(String),
}

/// A validator declared on a model attribute.
#[derive(Debug, Clone)]
pub struct ValidatorMeta {
    /// Validator kind.
    pub kind: ValidatorKind,
    /// Context restriction (`on:`).
    pub on: Option<ValidationContext>,
    /// Whether the validator runs only under an `if`/`unless` condition.
    pub conditional: bool,
}

impl ValidatorMeta {
    /// Creates an unconditional validator.
    pub fn new(kind: ValidatorKind) -> Self {
        Self {
            kind,
            on: None,
            conditional: false,
        }
    }

    /// Creates a presence validator.
    pub fn presence() -> Self {
        Self::new(ValidatorKind::Presence)
    }

    /// Creates a length validator with a maximum.
    pub fn max_length(maximum: usize) -> Self {
        Self::new(ValidatorKind::Length {
            is: None,
            maximum: Some(maximum),
        })
    }

    /// Creates a format validator.
    pub fn format(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(ValidatorKind::Format {
            with: Regex::new(pattern)?,
        }))
    }

    /// Restricts the validator to a context.
    #[must_use]
    pub fn on(mut self, context: ValidationContext) -> Self {
        self.on = Some(context);
        self
    }

    /// Marks the validator as conditional.
    #[must_use]
    pub fn conditional(mut self) -> Self {
        self.conditional = true;
        self
    }

    /// Whether the validator applies to an object in the given state.
    pub fn applies(&self, persisted: bool) -> bool {
        if self.conditional {
            return false;
        }
        match self.on {
            None | Some(ValidationContext::Save) => true,
            Some(ValidationContext::Create) => !persisted,
            Some(ValidationContext::Update) => persisted,
        }
    }
}

/// Validators declared on a model type, by attribute.
#[derive(Debug, Clone, Default)]
pub struct Validations {
    validators: HashMap<String, Vec<ValidatorMeta>>,
}

impl Validations {
    /// Creates an empty set of validations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a validator on an attribute.
    #[must_use]
    pub fn validates(mut self, attribute: &str, validator: ValidatorMeta) -> Self {
        self.validators
            .entry(attribute.to_string())
            .or_default()
            .push(validator);
        self
    }

    /// Returns the validators declared on an attribute.
    pub fn on(&self, attribute: &str) -> &[ValidatorMeta] {
        self.validators
            .get(attribute)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Turns an attribute name into a human name: `address_id` -> `Address`.
pub fn humanize(attribute: &str) -> String {
    let base = attribute.strip_suffix("_id").unwrap_or(attribute);
    let spaced = base.replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = name.strip_suffix('s') {
        stem.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("email"), "Email");
        assert_eq!(humanize("address_id"), "Address");
        assert_eq!(humanize("first_name"), "First name");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_reflection_foreign_keys() {
        assert_eq!(Reflection::belongs_to("address").foreign_key, "address_id");
        assert_eq!(Reflection::has_many("tags").foreign_key, "tag_ids");
        assert_eq!(Reflection::has_many("categories").foreign_key, "category_ids");
        assert_eq!(
            Reflection::belongs_to("author").foreign_key("writer_id").foreign_key,
            "writer_id"
        );
    }

    #[test]
    fn test_validator_applies() {
        assert!(ValidatorMeta::presence().applies(false));
        assert!(!ValidatorMeta::presence().conditional().applies(false));

        let on_create = ValidatorMeta::presence().on(ValidationContext::Create);
        assert!(on_create.applies(false));
        assert!(!on_create.applies(true));

        let on_update = ValidatorMeta::presence().on(ValidationContext::Update);
        assert!(!on_update.applies(false));
        assert!(on_update.applies(true));
    }

    #[test]
    fn test_validations_on() {
        let validations = Validations::new()
            .validates("name", ValidatorMeta::presence())
            .validates("name", ValidatorMeta::max_length(20));
        assert_eq!(validations.on("name").len(), 2);
        assert!(validations.on("email").is_empty());
    }
}
