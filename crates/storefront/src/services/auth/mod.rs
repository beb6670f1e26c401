//! Authentication service.
//!
//! A stub: one configured demo account can log in, and registration accepts
//! anything except the reserved address. Nothing is persisted.

mod error;

pub use error::AuthError;

use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use quickbite_core::UserId;

use crate::config::DemoAccountConfig;

/// Display name of the demo account.
pub const DEMO_USER_NAME: &str = "Demo User";

/// Fixed id of the demo account.
pub const DEMO_USER_ID: &str = "1";

/// A logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginGrant {
    pub user: AuthenticatedUser,
    pub token: SecretString,
}

/// Sign-up details the service needs.
#[derive(Debug, Clone, Copy)]
pub struct NewAccount<'a> {
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// A freshly registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Authentication service backed by the demo account.
#[derive(Debug, Clone)]
pub struct DemoAuthService {
    account: DemoAccountConfig,
}

impl DemoAuthService {
    #[must_use]
    pub const fn new(account: DemoAccountConfig) -> Self {
        Self { account }
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` unless both match the demo
    /// account exactly.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginGrant, AuthError> {
        if !self.account.accepts(email, password) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(LoginGrant {
            user: AuthenticatedUser {
                id: UserId::new(DEMO_USER_ID),
                name: DEMO_USER_NAME.to_string(),
                email: self.account.email.to_string(),
            },
            token: SecretString::from(self.account.token.expose_secret()),
        })
    }

    /// Register a new account. Field contents are not validated.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailTaken` for the reserved address, compared
    /// case-insensitively.
    pub fn register(&self, account: NewAccount<'_>) -> Result<RegisteredUser, AuthError> {
        if self.account.reserved_email.matches(account.email) {
            return Err(AuthError::EmailTaken);
        }

        Ok(RegisteredUser {
            id: UserId::new(Uuid::new_v4().to_string()),
            email: account.email.trim().to_string(),
            first_name: account.first_name.to_string(),
            last_name: account.last_name.to_string(),
        })
    }
}
