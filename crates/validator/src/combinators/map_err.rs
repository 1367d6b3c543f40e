//! Reason relabelling.

use crate::foundation::Validate;

/// Runs a validator and converts its failure reason with a function.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::prelude::*;
///
/// let validator = email_format().map_err(|_| "bad email");
/// assert_eq!(validator.validate("nope"), Err("bad email"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MapErr<V, F> {
    inner: V,
    map: F,
}

impl<V, F> MapErr<V, F> {
    /// Wraps `inner`, converting its reasons with `map`.
    pub fn new(inner: V, map: F) -> Self {
        Self { inner, map }
    }

    /// Returns the wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V, F, E> Validate for MapErr<V, F>
where
    V: Validate,
    F: Fn(V::Error) -> E,
{
    type Input = V::Input;
    type Error = E;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), E> {
        self.inner.validate(input).map_err(&self.map)
    }
}
