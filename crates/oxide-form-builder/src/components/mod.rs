//! Independent pieces of input behavior.
//!
//! `required`, `readonly` and `errors` are computed when an input is built.
//! `maxlength`, `pattern` and `placeholders` fill in input attributes when
//! a widget asks for them, and only run when their option is not `false`.

pub mod errors;
pub mod hints;
pub mod maxlength;
pub mod pattern;
pub mod placeholders;
pub mod readonly;
pub mod required;

pub use errors::ErrorAssembler;
