//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Reasons**: [`EmailError`], [`PasswordError`], [`ValidationReason`]
//!
//! A validator takes a borrowed input and returns `Ok(())` or
//! `Err(reason)`. Leaves and composites implement the same trait, so a
//! composite can hold other composites to any depth and callers never need to
//! know which one they were handed.

pub mod error;
pub mod traits;

pub use error::{EmailError, PasswordError, ValidationReason};
pub use traits::{Validate, ValidateExt};

/// Outcome of a single validation call: `Ok(())` is valid, `Err(reason)` is
/// invalid.
pub type ValidationResult<E> = Result<(), E>;

/// Validates a value with a validator.
///
/// Convenience for one-off validations where the validator is a temporary.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::foundation::validate_value;
/// use fieldguard_validator::validators::contains_number;
///
/// assert!(validate_value("abc1", &contains_number()).is_ok());
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> ValidationResult<V::Error>
where
    V: Validate + ?Sized,
{
    validator.validate(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;
        type Error = EmailError;

        fn validate(&self, _input: &Self::Input) -> ValidationResult<EmailError> {
            Ok(())
        }
    }

    #[test]
    fn test_validate_value() {
        assert!(validate_value("test", &AlwaysValid).is_ok());
    }
}
