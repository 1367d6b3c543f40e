//! Macros for creating validators with minimal boilerplate.
//!
//! - [`validator!`] — unit leaf validator (struct + `Validate` impl + factory fn)
//! - [`composite!`] — [`Composite`](crate::combinators::Composite) from a list
//!   of validators

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a zero-sized leaf validator: struct definition, `Validate`
/// implementation and an optional `const` factory function.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always
/// applied.
///
/// ```rust
/// use fieldguard_validator::validator;
/// use fieldguard_validator::foundation::{PasswordError, Validate};
///
/// validator! {
///     /// Rejects passwords without a `!`.
///     pub Bang for str => PasswordError;
///     rule(input) { input.contains('!') }
///     error(input) { PasswordError::TooShort }
///     fn bang();
/// }
///
/// assert!(bang().validate("hi!").is_ok());
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty => $error:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input => $error;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty => $error:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;
            type Error = $error;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> ::std::result::Result<(), Self::Error> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSITE MACRO
// ============================================================================

/// Builds a [`Composite`](crate::combinators::Composite) whose children run
/// in the listed order.
///
/// ```rust
/// use fieldguard_validator::prelude::*;
///
/// let validator = composite![empty_string(EmailError::Empty), email_format()];
/// assert_eq!(validator.validate(""), Err(EmailError::Empty));
/// ```
#[macro_export]
macro_rules! composite {
    () => {
        $crate::combinators::Composite::new(::std::vec::Vec::new())
    };
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::Composite::new(::std::vec![
            $($crate::foundation::ValidateExt::boxed($validator)),+
        ])
    };
}
