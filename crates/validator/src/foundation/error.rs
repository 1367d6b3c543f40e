//! Failure reasons reported by validators.
//!
//! Every reason is a closed enumeration. A failing validator returns one of
//! these as its `Err` value; callers map them to user-facing messages.

use serde::{Deserialize, Serialize};

/// Common behaviour of failure reasons.
pub trait ValidationReason: std::error::Error + Copy + Eq + Send + Sync + 'static {
    /// Stable machine-readable code, e.g. `"password.too_short"`.
    fn code(&self) -> &'static str;

    /// Name of the field kind the reason belongs to.
    fn field(&self) -> &'static str;
}

// ============================================================================
// EMAIL
// ============================================================================

/// Why an email address was rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
#[serde(rename_all = "snake_case")]
pub enum EmailError {
    /// The input was the empty string.
    #[error("email must not be empty")]
    Empty,
    /// The input does not look like `local@domain.tld`.
    #[error("email has an invalid format")]
    InvalidFormat,
}

impl ValidationReason for EmailError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "email.empty",
            Self::InvalidFormat => "email.invalid_format",
        }
    }

    fn field(&self) -> &'static str {
        "email"
    }
}

// ============================================================================
// PASSWORD
// ============================================================================

/// Why a password was rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
#[serde(rename_all = "snake_case")]
pub enum PasswordError {
    /// The input was the empty string.
    #[error("password must not be empty")]
    Empty,
    /// Fewer characters than the configured minimum.
    #[error("password is too short")]
    TooShort,
    /// No character in `A-Z`.
    #[error("password must contain an uppercase letter")]
    NoUppercaseLetter,
    /// No character in `a-z`.
    #[error("password must contain a lowercase letter")]
    NoLowercaseLetter,
    /// No digit `0-9`.
    #[error("password must contain a number")]
    NoNumber,
}

impl ValidationReason for PasswordError {
    fn code(&self) -> &'static str {
        match self {
            Self::Empty => "password.empty",
            Self::TooShort => "password.too_short",
            Self::NoUppercaseLetter => "password.no_uppercase_letter",
            Self::NoLowercaseLetter => "password.no_lowercase_letter",
            Self::NoNumber => "password.no_number",
        }
    }

    fn field(&self) -> &'static str {
        "password"
    }
}
