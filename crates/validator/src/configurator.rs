//! Pre-wired validators for known field kinds
//!
//! [`ValidatorConfigurator`] is an immutable factory. The process-wide
//! instance from [`ValidatorConfigurator::shared`] uses default settings;
//! [`email_validator`] and [`password_validator`] delegate to it.
//!
//! ```rust
//! use fieldguard_validator::prelude::*;
//!
//! let password = password_validator();
//! assert_eq!(password.validate("passw0rd"), Err(PasswordError::NoUppercaseLetter));
//! assert!(password.validate("paSSw0rd").is_ok());
//! ```

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::combinators::Composite;
use crate::foundation::{EmailError, PasswordError, ValidateExt};
use crate::validators::{
    DEFAULT_MIN_PASSWORD_LENGTH, PasswordLength, contains_number, email_format, empty_string,
    lowercase_letter, uppercase_letter,
};

/// Environment variable overriding the minimum password length.
pub const MIN_PASSWORD_LENGTH_ENV: &str = "FIELDGUARD_PASSWORD_MIN_LENGTH";

/// Validator for email addresses.
pub type EmailValidator = Composite<str, EmailError>;

/// Validator for passwords.
pub type PasswordValidator = Composite<str, PasswordError>;

// ============================================================================
// SETTINGS
// ============================================================================

/// Errors raised while loading [`ConfiguratorSettings`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings document could not be parsed.
    #[error("invalid validator settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// `min_password_length` was zero.
    #[error("min_password_length must be at least 1")]
    ZeroPasswordLength,
}

/// Tunables for the validators a configurator builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfiguratorSettings {
    /// Minimum number of user-perceived characters in a password.
    pub min_password_length: usize,
}

impl Default for ConfiguratorSettings {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl ConfiguratorSettings {
    /// Parses settings from a JSON document. Missing keys keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.check()?;
        tracing::debug!(?settings, "loaded validator settings from json");
        Ok(settings)
    }

    /// Reads settings from the environment.
    ///
    /// Unset, unparsable or zero values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        let raw = std::env::var(MIN_PASSWORD_LENGTH_ENV).ok();
        settings.apply_env_value(raw.as_deref());

        tracing::debug!(?settings, "loaded validator settings from environment");
        settings
    }

    /// Applies a raw `FIELDGUARD_PASSWORD_MIN_LENGTH` value. Surrounding
    /// whitespace is ignored; unparsable or zero values leave the setting
    /// unchanged.
    fn apply_env_value(&mut self, raw: Option<&str>) {
        let Some(raw) = raw else {
            return;
        };

        match raw.trim().parse::<usize>() {
            Ok(min) if min > 0 => self.min_password_length = min,
            _ => tracing::warn!(
                var = MIN_PASSWORD_LENGTH_ENV,
                value = %raw,
                "ignoring invalid minimum password length"
            ),
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.min_password_length == 0 {
            return Err(ConfigError::ZeroPasswordLength);
        }
        Ok(())
    }
}

// ============================================================================
// CONFIGURATOR
// ============================================================================

static SHARED: LazyLock<ValidatorConfigurator> = LazyLock::new(|| {
    tracing::debug!("creating shared validator configurator");
    ValidatorConfigurator::default()
});

/// Factory for the email and password composites.
///
/// Holds only immutable settings, so one instance can serve every thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidatorConfigurator {
    settings: ConfiguratorSettings,
}

impl ValidatorConfigurator {
    /// The process-wide instance with default settings.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Creates a configurator with custom settings.
    pub fn with_settings(settings: ConfiguratorSettings) -> Result<Self, ConfigError> {
        settings.check()?;
        Ok(Self { settings })
    }

    /// Settings this configurator builds with.
    pub fn settings(&self) -> &ConfiguratorSettings {
        &self.settings
    }

    /// `[empty, format]`: empty input reports [`EmailError::Empty`] rather
    /// than a format failure.
    pub fn email_validator(&self) -> EmailValidator {
        Composite::builder()
            .with(empty_string(EmailError::Empty))
            .with(email_format())
            .build()
    }

    /// `[empty, [length, uppercase, lowercase, number]]`.
    ///
    /// The strength checks form a nested composite, and length is checked
    /// before any character class.
    pub fn password_validator(&self) -> PasswordValidator {
        let strength = Composite::new(vec![
            PasswordLength::new(self.settings.min_password_length).boxed(),
            uppercase_letter().boxed(),
            lowercase_letter().boxed(),
            contains_number().boxed(),
        ]);

        Composite::builder()
            .with(empty_string(PasswordError::Empty))
            .with(strength)
            .build()
    }
}

/// Email validator from the shared configurator.
pub fn email_validator() -> EmailValidator {
    ValidatorConfigurator::shared().email_validator()
}

/// Password validator from the shared configurator.
pub fn password_validator() -> PasswordValidator {
    ValidatorConfigurator::shared().password_validator()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_shared_is_single_instance() {
        let a = ValidatorConfigurator::shared();
        let b = ValidatorConfigurator::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.settings().min_password_length, 8);
    }

    #[test]
    fn test_composite_shapes() {
        assert_eq!(email_validator().len(), 2);
        assert_eq!(password_validator().len(), 2);
    }

    #[test]
    fn test_custom_min_length() {
        let configurator = ValidatorConfigurator::with_settings(ConfiguratorSettings {
            min_password_length: 4,
        })
        .unwrap();
        let validator = configurator.password_validator();
        assert!(validator.validate("aB1x").is_ok());
        assert_eq!(validator.validate("aB1"), Err(PasswordError::TooShort));
    }

    #[test]
    fn test_zero_min_length_rejected() {
        let result = ValidatorConfigurator::with_settings(ConfiguratorSettings {
            min_password_length: 0,
        });
        assert!(matches!(result, Err(ConfigError::ZeroPasswordLength)));
    }

    #[test]
    fn test_settings_from_json() {
        let settings = ConfiguratorSettings::from_json(r#"{"min_password_length": 12}"#).unwrap();
        assert_eq!(settings.min_password_length, 12);

        let defaults = ConfiguratorSettings::from_json("{}").unwrap();
        assert_eq!(defaults, ConfiguratorSettings::default());
    }

    #[test]
    fn test_env_value_overrides_length() {
        let mut settings = ConfiguratorSettings::default();
        settings.apply_env_value(Some("12"));
        assert_eq!(settings.min_password_length, 12);

        let mut padded = ConfiguratorSettings::default();
        padded.apply_env_value(Some(" 12 "));
        assert_eq!(padded.min_password_length, 12);
    }

    #[test]
    fn test_env_value_invalid_keeps_default() {
        for raw in [None, Some("abc"), Some("0"), Some(""), Some("-3")] {
            let mut settings = ConfiguratorSettings::default();
            settings.apply_env_value(raw);
            assert_eq!(settings, ConfiguratorSettings::default(), "{raw:?}");
        }
    }

    #[test]
    fn test_settings_from_env_reads_variable() {
        // SAFETY: this is the only test that touches this variable.
        unsafe { std::env::set_var(MIN_PASSWORD_LENGTH_ENV, " 11 ") };
        assert_eq!(ConfiguratorSettings::from_env().min_password_length, 11);

        unsafe { std::env::set_var(MIN_PASSWORD_LENGTH_ENV, "abc") };
        assert_eq!(
            ConfiguratorSettings::from_env(),
            ConfiguratorSettings::default()
        );

        unsafe { std::env::remove_var(MIN_PASSWORD_LENGTH_ENV) };
        assert_eq!(
            ConfiguratorSettings::from_env(),
            ConfiguratorSettings::default()
        );
        assert_eq!(ValidatorConfigurator::shared().settings().min_password_length, 8);
    }

    #[test]
    fn test_settings_from_json_errors() {
        assert!(matches!(
            ConfiguratorSettings::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ConfiguratorSettings::from_json(r#"{"min_password_length": 0}"#),
            Err(ConfigError::ZeroPasswordLength)
        ));
    }
}
