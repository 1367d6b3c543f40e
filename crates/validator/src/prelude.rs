//! Prelude module for convenient imports.
//!
//! `use fieldguard_validator::prelude::*;` brings in the traits, reasons,
//! leaves, combinators and configurator entry points.

pub use crate::foundation::{
    EmailError, PasswordError, Validate, ValidateExt, ValidationReason, ValidationResult,
};

pub use crate::validators::{
    ContainsNumber, EmailFormat, EmptyString, LowercaseLetter, PasswordLength, UppercaseLetter,
    contains_number, email_format, empty_string, lowercase_letter, password_length,
    uppercase_letter,
};

pub use crate::combinators::{And, BoxedValidator, Composite, MapErr, and};

pub use crate::configurator::{
    ConfiguratorSettings, EmailValidator, PasswordValidator, ValidatorConfigurator,
    email_validator, password_validator,
};

pub use crate::composite;
