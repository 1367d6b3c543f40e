//! AND combinator - logical conjunction of two validators
//!
//! [`And`] is the statically-dispatched two-element form of a
//! [`Composite`](super::Composite): both sides must pass, the left side runs
//! first and its failure wins.
//!
//! # Examples
//!
//! ```rust
//! use fieldguard_validator::combinators::And;
//! use fieldguard_validator::foundation::Validate;
//! use fieldguard_validator::validators::{lowercase_letter, uppercase_letter};
//!
//! let validator = And::new(uppercase_letter(), lowercase_letter());
//! assert!(validator.validate("Ab").is_ok());
//! assert!(validator.validate("ab").is_err()); // fails uppercase
//! ```

use crate::foundation::Validate;

/// Combines two validators with logical AND.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input, Error = L::Error>,
{
    type Input = L::Input;
    type Error = L::Error;

    fn validate(&self, input: &Self::Input) -> Result<(), Self::Error> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input, Error = L::Error>,
{
    And::new(left, right)
}
