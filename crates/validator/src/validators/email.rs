//! Email format validator.

use std::sync::LazyLock;

use crate::foundation::EmailError;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

crate::validator! {
    /// Validates email format.
    ///
    /// The whole input must be `local-part@domain`, where the domain is one or
    /// more dot-separated labels of 1-63 alphanumeric characters with
    /// hyphens allowed only inside a label.
    pub EmailFormat for str => EmailError;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { EmailError::InvalidFormat }
    fn email_format();
}
