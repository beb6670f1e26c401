//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email and password are not the demo pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration with an address that is already on file.
    #[error("email already registered")]
    EmailTaken,
}
