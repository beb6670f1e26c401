//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `QUICKBITE_HOST` - Bind address (default: 127.0.0.1)
//! - `QUICKBITE_PORT` - Listen port (default: 3000)
//! - `QUICKBITE_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `QUICKBITE_DEMO_EMAIL` - Demo login email (default: user@example.com)
//! - `QUICKBITE_DEMO_PASSWORD` - Demo login password (default: password123)
//! - `QUICKBITE_DEMO_TOKEN` - Token returned on demo login (default: demo-token-12345)
//! - `QUICKBITE_RESERVED_EMAIL` - Email that registration always reports as taken
//!   (default: existing@example.com)
//! - `QUICKBITE_SUBMIT_TIMEOUT_SECS` - Order submission timeout, at least 1 (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.1)

use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU64;
use std::time::Duration;

use quickbite_core::{CredentialError, Email, Password};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Invalid credential in {0}: {1}")]
    InvalidCredential(String, CredentialError),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Stub account used by the auth endpoints
    pub demo_account: DemoAccountConfig,
    /// Upper bound on a single order submission
    pub submit_timeout: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production", "staging")
    pub sentry_environment: Option<String>,
    pub sentry_sample_rate: f32,
    pub sentry_traces_sample_rate: f32,
}

/// Demo account for the stub login and register endpoints.
///
/// Implements `Debug` manually to redact secret fields.
#[derive(Clone)]
pub struct DemoAccountConfig {
    pub email: Email,
    pub password: SecretString,
    /// Bearer token handed back on a successful login
    pub token: SecretString,
    /// Address that registration always treats as taken
    pub reserved_email: Email,
}

impl std::fmt::Debug for DemoAccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoAccountConfig")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("token", &"[REDACTED]")
            .field("reserved_email", &self.reserved_email)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value fails to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(&lookup);

        let host = env.parse_or("QUICKBITE_HOST", "127.0.0.1")?;
        let port = env.parse_or("QUICKBITE_PORT", "3000")?;
        let base_url = env.get_or_default("QUICKBITE_BASE_URL", "http://localhost:3000");
        let demo_account = DemoAccountConfig::from_env(&env)?;
        let submit_timeout_secs: NonZeroU64 =
            env.parse_or("QUICKBITE_SUBMIT_TIMEOUT_SECS", "10")?;
        let submit_timeout = Duration::from_secs(submit_timeout_secs.get());
        let sentry_dsn = env.get_optional("SENTRY_DSN");
        let sentry_environment = env.get_optional("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = env
            .get_optional("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = env
            .get_optional("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.1);

        Ok(Self {
            host,
            port,
            base_url,
            demo_account,
            submit_timeout,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` flag.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl DemoAccountConfig {
    fn from_env(env: &Env<'_>) -> Result<Self, ConfigError> {
        let email = env.email_or("QUICKBITE_DEMO_EMAIL", "user@example.com")?;
        let password = env.get_or_default("QUICKBITE_DEMO_PASSWORD", "password123");
        Password::parse(&password).map_err(|e| {
            ConfigError::InvalidCredential("QUICKBITE_DEMO_PASSWORD".to_string(), e)
        })?;
        let token = env.get_or_default("QUICKBITE_DEMO_TOKEN", "demo-token-12345");
        let reserved_email = env.email_or("QUICKBITE_RESERVED_EMAIL", "existing@example.com")?;

        Ok(Self {
            email,
            password: SecretString::from(password),
            token: SecretString::from(token),
            reserved_email,
        })
    }

    /// Whether `email`/`password` is the demo pair. Both must match exactly.
    #[must_use]
    pub fn accepts(&self, email: &str, password: &str) -> bool {
        email == self.email.as_str() && password == self.password.expose_secret()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with the usual default/optional helpers.
struct Env<'a>(&'a dyn Fn(&str) -> Option<String>);

impl Env<'_> {
    /// Get an optional variable. Empty values count as unset.
    fn get_optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.is_empty())
    }

    /// Get a variable with a default value.
    fn get_or_default(&self, key: &str, default: &str) -> String {
        self.get_optional(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: &str) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.get_or_default(key, default)
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    }

    fn email_or(&self, key: &str, default: &str) -> Result<Email, ConfigError> {
        Email::parse(&self.get_or_default(key, default))
            .map_err(|e| ConfigError::InvalidCredential(key.to_string(), e))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.demo_account.email.as_str(), "user@example.com");
        assert_eq!(config.demo_account.password.expose_secret(), "password123");
        assert_eq!(config.demo_account.token.expose_secret(), "demo-token-12345");
        assert_eq!(
            config.demo_account.reserved_email.as_str(),
            "existing@example.com"
        );
        assert_eq!(config.submit_timeout, Duration::from_secs(10));
        assert!(config.sentry_dsn.is_none());
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
        assert!(!config.is_secure());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("QUICKBITE_HOST", "0.0.0.0"),
            ("QUICKBITE_PORT", "8080"),
            ("QUICKBITE_BASE_URL", "https://quickbite.example"),
            ("QUICKBITE_SUBMIT_TIMEOUT_SECS", "3"),
            ("SENTRY_DSN", "https://key@sentry.example/1"),
            ("SENTRY_TRACES_SAMPLE_RATE", "0.5"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.submit_timeout, Duration::from_secs(3));
        assert_eq!(
            config.sentry_dsn.as_deref(),
            Some("https://key@sentry.example/1")
        );
        assert!((config.sentry_traces_sample_rate - 0.5).abs() < f32::EPSILON);
        assert!(config.is_secure());
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("QUICKBITE_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "QUICKBITE_PORT"));
    }

    #[test]
    fn test_zero_submit_timeout_is_rejected() {
        let err = load(&[("QUICKBITE_SUBMIT_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar(key, _) if key == "QUICKBITE_SUBMIT_TIMEOUT_SECS"
        ));
    }

    #[test]
    fn test_invalid_demo_credentials() {
        let err = load(&[("QUICKBITE_DEMO_EMAIL", "nobody")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidCredential(_, CredentialError::MalformedEmail)
        ));

        let err = load(&[("QUICKBITE_DEMO_PASSWORD", "abc")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidCredential(_, CredentialError::PasswordTooShort { .. })
        ));
    }

    #[test]
    fn test_demo_account_accepts_exact_pair() {
        let demo = load(&[]).unwrap().demo_account;

        assert!(demo.accepts("user@example.com", "password123"));
        assert!(!demo.accepts("USER@example.com", "password123"));
        assert!(!demo.accepts("user@example.com", "password124"));
        assert!(!demo.accepts("", ""));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = load(&[("QUICKBITE_DEMO_PASSWORD", "hunter2-long")]).unwrap();
        let debug = format!("{config:?}");

        assert!(!debug.contains("hunter2-long"));
        assert!(!debug.contains("demo-token-12345"));
        assert!(debug.contains("[REDACTED]"));
    }
}
