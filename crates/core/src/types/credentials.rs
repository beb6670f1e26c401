//! Login credential types.
//!
//! The auth endpoints are demo stubs, but they still reject input that the
//! sign-up form would never send: malformed email addresses and passwords
//! shorter than the form's minimum.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors produced when parsing login credentials.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("email cannot be empty")]
    EmptyEmail,
    #[error("email must be at most {max} characters")]
    EmailTooLong { max: usize },
    #[error("email must look like name@domain")]
    MalformedEmail,
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// A syntactically valid email address.
///
/// Exactly one `@` with non-empty text on both sides. Comparison is
/// case-sensitive; callers normalise if they need to.
///
/// ```
/// use quickbite_core::Email;
///
/// assert!(Email::parse("user@example.com").is_ok());
/// assert!(Email::parse("user@").is_err());
/// assert!(Email::parse("a@b@c").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// RFC 5321 path limit.
    pub const MAX_LENGTH: usize = 254;

    /// Parse and validate an email address. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialError`] describing the first rule violated.
    pub fn parse(raw: &str) -> Result<Self, CredentialError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(CredentialError::EmptyEmail);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(CredentialError::EmailTooLong {
                max: Self::MAX_LENGTH,
            });
        }

        match s.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(s.to_owned()))
            }
            _ => Err(CredentialError::MalformedEmail),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw string.
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = CredentialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// A password that satisfies the sign-up form's length rule.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Minimum length enforced by the sign-up form.
    pub const MIN_LENGTH: usize = 6;

    /// # Errors
    ///
    /// Returns [`CredentialError::PasswordTooShort`] below [`Self::MIN_LENGTH`]
    /// characters.
    pub fn parse(raw: &str) -> Result<Self, CredentialError> {
        if raw.chars().count() < Self::MIN_LENGTH {
            return Err(CredentialError::PasswordTooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
