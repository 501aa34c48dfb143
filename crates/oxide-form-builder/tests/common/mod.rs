//! Shared fixtures for integration tests.

#![allow(dead_code)]

use oxide_form_builder::{
    Column, ErrorCollection, FormObject, Reflection, ValidationErrors, ValidatorMeta, Validations,
};

/// A user model with an `address` association.
pub struct User {
    pub errors: ValidationErrors,
    pub validations: Validations,
    pub persisted: bool,
}

impl User {
    pub fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
            validations: Validations::new()
                .validates("name", ValidatorMeta::presence())
                .validates("name", ValidatorMeta::max_length(25))
                .validates("address", ValidatorMeta::presence()),
            persisted: false,
        }
    }

    pub fn with_errors(errors: ValidationErrors) -> Self {
        Self {
            errors,
            ..Self::new()
        }
    }
}

impl FormObject for User {
    fn errors(&self) -> Option<&dyn ErrorCollection> {
        Some(&self.errors)
    }

    fn validations(&self) -> Option<&Validations> {
        Some(&self.validations)
    }

    fn column_for_attribute(&self, attribute: &str) -> Option<Column> {
        match attribute {
            "name" => Some(Column::varchar("name", 100)),
            "email" => Some(Column::varchar("email", 5)),
            "bio" => Some(Column::new("bio", "TEXT")),
            _ => None,
        }
    }

    fn reflect_on_association(&self, name: &str) -> Option<Reflection> {
        (name == "address").then(|| Reflection::belongs_to("address"))
    }

    fn is_persisted(&self) -> bool {
        self.persisted
    }
}

/// An object that cannot be validated.
pub struct Draft;

impl FormObject for Draft {}
