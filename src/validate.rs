#![forbid(unsafe_code)]

//! Field validators

mod builtin;
mod field_validator;

pub use builtin::{ValidatorRegistry, builtin_validators};
pub use field_validator::FieldValidator;
