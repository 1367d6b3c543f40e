//! Core traits for the validation system
//!
//! This module defines the capability every validator implements, leaf or
//! composite alike.

use std::sync::Arc;

use crate::combinators::{And, BoxedValidator, MapErr};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// A validator is a pure function from an input to an outcome: `Ok(())` when
/// the input is valid, `Err(reason)` when it is not. Failing to validate is a
/// normal return value, never a fault.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
/// * `Error` - The reason reported when validation fails
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::foundation::Validate;
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///     type Error = &'static str;
///
///     fn validate(&self, input: &str) -> Result<(), Self::Error> {
///         if input.contains(' ') { Err("contains_space") } else { Ok(()) }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert_eq!(NoSpaces.validate("a b"), Err("contains_space"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// The reason reported on failure.
    type Error;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(reason)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), Self::Error>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;
    type Error = V::Error;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), Self::Error> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;
    type Error = V::Error;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), Self::Error> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;
    type Error = V::Error;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), Self::Error> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every `Validate` type.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::prelude::*;
///
/// let validator = uppercase_letter().and(contains_number());
/// assert_eq!(validator.validate("A1"), Ok(()));
/// assert_eq!(validator.validate("A"), Err(PasswordError::NoNumber));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Both validators must pass. Short-circuits on the first failure, so
    /// the reported reason is always the left one when both fail.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input, Error = Self::Error>,
    {
        And::new(self, other)
    }

    /// Relabels the failure reason.
    ///
    /// Lets leaves with different reason types join the same composite.
    fn map_err<F, E>(self, f: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error) -> E,
    {
        MapErr::new(self, f)
    }

    /// Erases the concrete validator type so it can sit in a
    /// [`Composite`](crate::combinators::Composite) next to other
    /// validators, leaf or composite.
    fn boxed(self) -> BoxedValidator<Self::Input, Self::Error>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}
