//! # fieldguard-validator
//!
//! Composable string validators built on the composite pattern.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! let email = email_validator();
//! assert_eq!(email.validate(""), Err(EmailError::Empty));
//! assert_eq!(email.validate("invalidEmail@"), Err(EmailError::InvalidFormat));
//! assert!(email.validate("validEmail@validDomain.com").is_ok());
//!
//! let password = password_validator();
//! assert_eq!(password.validate("psS$"), Err(PasswordError::TooShort));
//! assert!(password.validate("paSSw0rd").is_ok());
//! ```
//!
//! ## Building Blocks
//!
//! - [`Validate`](foundation::Validate) is implemented by every validator.
//! - Leaves live in [`validators`]; each checks one property.
//! - [`Composite`](combinators::Composite) runs children in order and stops
//!   at the first failure. It is a validator too, so composites nest.
//! - [`configurator`] wires leaves into the email and password composites.

pub mod combinators;
pub mod configurator;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
