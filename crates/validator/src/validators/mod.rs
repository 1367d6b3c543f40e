//! Built-in leaf validators
//!
//! - **Presence**: [`EmptyString`]
//! - **Email**: [`EmailFormat`]
//! - **Password**: [`PasswordLength`], [`UppercaseLetter`],
//!   [`LowercaseLetter`], [`ContainsNumber`]

pub mod email;
pub mod empty;
pub mod password;

pub use email::{EmailFormat, email_format};
pub use empty::{EmptyString, empty_string};
pub use password::{
    ContainsNumber, DEFAULT_MIN_PASSWORD_LENGTH, LowercaseLetter, PasswordLength,
    UppercaseLetter, contains_number, lowercase_letter, password_length, uppercase_letter,
};
