//! Empty-input validator.

use crate::foundation::Validate;

/// Rejects the empty string with a configured reason.
///
/// Generic over the reason so the same leaf reports `EmailError::Empty` in an
/// email composite and `PasswordError::Empty` in a password composite.
/// Whitespace-only input is not empty.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::foundation::{EmailError, Validate};
/// use fieldguard_validator::validators::EmptyString;
///
/// let validator = EmptyString::new(EmailError::Empty);
/// assert_eq!(validator.validate(""), Err(EmailError::Empty));
/// assert!(validator.validate(" ").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyString<E> {
    /// Reason returned for empty input.
    pub on_empty: E,
}

impl<E> EmptyString<E> {
    /// Creates a validator that reports `on_empty` for empty input.
    pub const fn new(on_empty: E) -> Self {
        Self { on_empty }
    }
}

impl<E: Clone> Validate for EmptyString<E> {
    type Input = str;
    type Error = E;

    fn validate(&self, input: &str) -> Result<(), E> {
        if input.is_empty() {
            Err(self.on_empty.clone())
        } else {
            Ok(())
        }
    }
}

/// Creates an [`EmptyString`] validator.
#[must_use]
pub const fn empty_string<E>(on_empty: E) -> EmptyString<E> {
    EmptyString::new(on_empty)
}
