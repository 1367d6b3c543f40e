//! Password strength validators
//!
//! Each leaf checks a single property. Length is measured in extended
//! grapheme clusters (user-perceived characters), so `"e\u{301}"` counts as
//! one character and so does a flag emoji. Character-class checks are ASCII:
//! `A-Z`, `a-z` and `0-9`.

use unicode_segmentation::UnicodeSegmentation;

use crate::foundation::{PasswordError, Validate};

/// Default minimum password length.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

// ============================================================================
// LENGTH
// ============================================================================

/// Validates that a password has at least `min` user-perceived characters.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::foundation::{PasswordError, Validate};
/// use fieldguard_validator::validators::PasswordLength;
///
/// let validator = PasswordLength::default();
/// assert!(validator.validate("12345678").is_ok());
/// assert_eq!(validator.validate("psS$"), Err(PasswordError::TooShort));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordLength {
    /// Minimum number of grapheme clusters (inclusive).
    pub min: usize,
}

impl PasswordLength {
    /// Creates a length validator with a custom minimum.
    #[must_use]
    pub const fn new(min: usize) -> Self {
        Self { min }
    }

    /// Counts the grapheme clusters in `input`.
    #[inline]
    fn measure(input: &str) -> usize {
        input.graphemes(true).count()
    }
}

impl Default for PasswordLength {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PASSWORD_LENGTH)
    }
}

impl Validate for PasswordLength {
    type Input = str;
    type Error = PasswordError;

    fn validate(&self, input: &str) -> Result<(), PasswordError> {
        // Byte length bounds the grapheme count from above.
        if input.len() < self.min || Self::measure(input) < self.min {
            Err(PasswordError::TooShort)
        } else {
            Ok(())
        }
    }
}

/// Creates a [`PasswordLength`] with the default minimum of 8.
#[must_use]
pub const fn password_length() -> PasswordLength {
    PasswordLength::new(DEFAULT_MIN_PASSWORD_LENGTH)
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::validator! {
    /// Requires at least one uppercase ASCII letter.
    pub UppercaseLetter for str => PasswordError;
    rule(input) { input.bytes().any(|b| b.is_ascii_uppercase()) }
    error(input) { PasswordError::NoUppercaseLetter }
    fn uppercase_letter();
}

crate::validator! {
    /// Requires at least one lowercase ASCII letter.
    pub LowercaseLetter for str => PasswordError;
    rule(input) { input.bytes().any(|b| b.is_ascii_lowercase()) }
    error(input) { PasswordError::NoLowercaseLetter }
    fn lowercase_letter();
}

crate::validator! {
    /// Requires at least one ASCII digit.
    pub ContainsNumber for str => PasswordError;
    rule(input) { input.bytes().any(|b| b.is_ascii_digit()) }
    error(input) { PasswordError::NoNumber }
    fn contains_number();
}
