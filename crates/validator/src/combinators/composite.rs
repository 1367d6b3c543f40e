//! Composite validator - an ordered, fail-fast sequence of validators
//!
//! [`Composite`] implements [`Validate`] itself, so a composite can be a child
//! of another composite. Callers cannot tell a leaf from a composite: both
//! take a string and return one outcome.
//!
//! # Examples
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! let strength = composite![password_length(), uppercase_letter()];
//! let password = composite![empty_string(PasswordError::Empty), strength];
//!
//! assert_eq!(password.validate(""), Err(PasswordError::Empty));
//! assert_eq!(password.validate("short"), Err(PasswordError::TooShort));
//! assert_eq!(password.validate("longenough"), Err(PasswordError::NoUppercaseLetter));
//! assert!(password.validate("Longenough").is_ok());
//! ```

use std::fmt;

use crate::foundation::{Validate, ValidateExt};

/// A type-erased validator that can be stored next to validators of other
/// concrete types.
pub type BoxedValidator<I, E> = Box<dyn Validate<Input = I, Error = E> + Send + Sync>;

/// An ordered collection of validators evaluated in insertion order.
///
/// The first child to fail decides the outcome and later children are not
/// run. A composite with no children accepts every input.
///
/// Children are fixed at construction; use [`Composite::builder`] to add
/// them one at a time.
pub struct Composite<I: ?Sized, E> {
    validators: Vec<BoxedValidator<I, E>>,
}

impl<I: ?Sized, E> Composite<I, E> {
    /// Creates a composite from an ordered sequence of validators.
    pub fn new(validators: Vec<BoxedValidator<I, E>>) -> Self {
        Self { validators }
    }

    /// Starts an empty builder.
    pub fn builder() -> CompositeBuilder<I, E> {
        CompositeBuilder {
            validators: Vec::new(),
        }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` when the composite has no children.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Runs every child and collects each failure reason, in order.
    ///
    /// Unlike [`Validate::validate`] this does not stop at the first failure.
    /// Nested composites still report only their own first failure.
    pub fn validate_all(&self, input: &I) -> Vec<E> {
        self.validators
            .iter()
            .filter_map(|validator| validator.validate(input).err())
            .collect()
    }
}

impl<I: ?Sized, E> Validate for Composite<I, E> {
    type Input = I;
    type Error = E;

    fn validate(&self, input: &I) -> Result<(), E> {
        for (index, validator) in self.validators.iter().enumerate() {
            if let Err(reason) = validator.validate(input) {
                tracing::trace!(index, "composite validation failed");
                return Err(reason);
            }
        }
        Ok(())
    }
}

impl<I: ?Sized, E> Default for Composite<I, E> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<I: ?Sized, E> FromIterator<BoxedValidator<I, E>> for Composite<I, E> {
    fn from_iter<T: IntoIterator<Item = BoxedValidator<I, E>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<I: ?Sized, E> fmt::Debug for Composite<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("len", &self.validators.len())
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects children for a [`Composite`].
pub struct CompositeBuilder<I: ?Sized, E> {
    validators: Vec<BoxedValidator<I, E>>,
}

impl<I: ?Sized + 'static, E: 'static> CompositeBuilder<I, E> {
    /// Appends a validator. Children run in the order they are added.
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = I, Error = E> + Send + Sync + 'static,
    {
        self.validators.push(validator.boxed());
        self
    }

    /// Freezes the children into a composite.
    pub fn build(self) -> Composite<I, E> {
        Composite::new(self.validators)
    }
}

impl<I: ?Sized, E> fmt::Debug for CompositeBuilder<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeBuilder")
            .field("len", &self.validators.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::foundation::PasswordError;
    use crate::validators::{contains_number, lowercase_letter, password_length, uppercase_letter};

    /// Counts calls so tests can see which children ran.
    struct Counting {
        calls: Arc<AtomicUsize>,
        outcome: Result<(), PasswordError>,
    }

    impl Validate for Counting {
        type Input = str;
        type Error = PasswordError;

        fn validate(&self, _input: &str) -> Result<(), PasswordError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome
        }
    }

    fn counting(outcome: Result<(), PasswordError>) -> (Counting, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Counting {
                calls: Arc::clone(&calls),
                outcome,
            },
            calls,
        )
    }

    #[test]
    fn test_empty_composite_is_valid() {
        let composite: Composite<str, PasswordError> = Composite::default();
        assert!(composite.is_empty());
        assert!(composite.validate("").is_ok());
        assert!(composite.validate("anything").is_ok());
    }

    #[test]
    fn test_short_circuits_on_first_failure() {
        let (first, first_calls) = counting(Err(PasswordError::TooShort));
        let (second, second_calls) = counting(Err(PasswordError::NoNumber));

        let composite = Composite::builder().with(first).with(second).build();

        assert_eq!(composite.validate("x"), Err(PasswordError::TooShort));
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_runs_all_children_when_valid() {
        let (first, first_calls) = counting(Ok(()));
        let (second, second_calls) = counting(Ok(()));

        let composite = Composite::builder().with(first).with(second).build();

        assert!(composite.validate("x").is_ok());
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_order_is_construction_order() {
        let forward = Composite::new(vec![uppercase_letter().boxed(), contains_number().boxed()]);
        let backward = Composite::new(vec![contains_number().boxed(), uppercase_letter().boxed()]);

        assert_eq!(forward.validate("abc"), Err(PasswordError::NoUppercaseLetter));
        assert_eq!(backward.validate("abc"), Err(PasswordError::NoNumber));
    }

    #[test]
    fn test_nested_composite() {
        let inner: Composite<str, PasswordError> =
            [lowercase_letter().boxed(), contains_number().boxed()]
                .into_iter()
                .collect();
        let outer = Composite::builder()
            .with(password_length())
            .with(inner)
            .build();

        assert_eq!(outer.len(), 2);
        assert_eq!(outer.validate("ABCDEFGH"), Err(PasswordError::NoLowercaseLetter));
        assert!(outer.validate("abcdefg1").is_ok());
    }

    #[test]
    fn test_validate_all_collects_in_order() {
        let composite = Composite::new(vec![
            password_length().boxed(),
            uppercase_letter().boxed(),
            lowercase_letter().boxed(),
            contains_number().boxed(),
        ]);

        assert_eq!(
            composite.validate_all("ab"),
            vec![
                PasswordError::TooShort,
                PasswordError::NoUppercaseLetter,
                PasswordError::NoNumber,
            ]
        );
        assert!(composite.validate_all("abcdefG1").is_empty());
    }

    /// Reason type without `Debug`.
    #[derive(PartialEq, Eq)]
    struct Opaque(u8);

    struct RejectOpaque;

    impl Validate for RejectOpaque {
        type Input = str;
        type Error = Opaque;

        fn validate(&self, _input: &str) -> Result<(), Opaque> {
            Err(Opaque(4))
        }
    }

    #[test]
    fn test_reason_without_debug() {
        let composite = Composite::builder().with(RejectOpaque).build();
        assert!(composite.validate("x") == Err(Opaque(4)));
    }

    #[test]
    fn test_debug_shows_len() {
        let composite = Composite::new(vec![uppercase_letter().boxed()]);
        assert_eq!(format!("{composite:?}"), "Composite { len: 1 }");
    }
}
