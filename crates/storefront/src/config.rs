//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `INKZAAR_HOST` - Bind address (default: 127.0.0.1)
//! - `INKZAAR_PORT` - Listen port (default: 3000)
//! - `INKZAAR_BASE_URL` - Public URL (default: <http://localhost:3000>); `https`
//!   turns on secure session cookies
//! - `INKZAAR_LOGIN_DELAY_MS` - Simulated sign-in latency (default: 1000)
//! - `INKZAAR_CHECKOUT_DELAY_MS` - Simulated order latency (default: 2000)
//! - `INKZAAR_INQUIRY_DELAY_MS` - Simulated form latency (default: 1000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: Url,
    /// Latency of the simulated services
    pub delays: ServiceDelays,
    /// Error tracking
    pub sentry: SentryConfig,
}

/// How long each mock service waits before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDelays {
    pub login: Duration,
    pub checkout: Duration,
    pub inquiry: Duration,
}

impl ServiceDelays {
    /// Answer immediately. Used by tests.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            login: Duration::ZERO,
            checkout: Duration::ZERO,
            inquiry: Duration::ZERO,
        }
    }
}

impl Default for ServiceDelays {
    fn default() -> Self {
        Self {
            login: Duration::from_millis(1000),
            checkout: Duration::from_millis(2000),
            inquiry: Duration::from_millis(1000),
        }
    }
}

/// Sentry settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SentryConfig {
    pub dsn: Option<String>,
    pub environment: Option<String>,
    pub sample_rate: f32,
    pub traces_sample_rate: f32,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: None,
            sample_rate: 1.0,
            traces_sample_rate: 0.0,
        }
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

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` for unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let host = env.parse_or("INKZAAR_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = env.parse_or("INKZAAR_PORT", 3000_u16)?;
        let base_url = env.parse_or(
            "INKZAAR_BASE_URL",
            Url::parse("http://localhost:3000")
                .map_err(|e| ConfigError::InvalidEnvVar("INKZAAR_BASE_URL".into(), e.to_string()))?,
        )?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "INKZAAR_BASE_URL".to_string(),
                format!("unsupported scheme {}", base_url.scheme()),
            ));
        }

        let defaults = ServiceDelays::default();
        let delays = ServiceDelays {
            login: env.millis_or("INKZAAR_LOGIN_DELAY_MS", defaults.login)?,
            checkout: env.millis_or("INKZAAR_CHECKOUT_DELAY_MS", defaults.checkout)?,
            inquiry: env.millis_or("INKZAAR_INQUIRY_DELAY_MS", defaults.inquiry)?,
        };

        let sentry = SentryConfig {
            dsn: env.optional("SENTRY_DSN"),
            environment: env.optional("SENTRY_ENVIRONMENT"),
            sample_rate: env.rate_or("SENTRY_SAMPLE_RATE", 1.0)?,
            traces_sample_rate: env.rate_or("SENTRY_TRACES_SAMPLE_RATE", 0.0)?,
        };

        Ok(Self {
            host,
            port,
            base_url,
            delays,
            sentry,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether session cookies should carry the `Secure` flag.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.base_url.scheme() == "https"
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get an optional variable, treating blank as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    /// Parse a variable, falling back to `default` when unset.
    fn parse_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(key).map_or(Ok(default), |raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
    }

    fn millis_or(&self, key: &str, default: Duration) -> Result<Duration, ConfigError> {
        let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
        self.parse_or(key, default_ms).map(Duration::from_millis)
    }

    /// Parse a sample rate in `[0.0, 1.0]`.
    fn rate_or(&self, key: &str, default: f32) -> Result<f32, ConfigError> {
        let rate = self.parse_or(key, default)?;
        if (0.0..=1.0).contains(&rate) {
            Ok(rate)
        } else {
            Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("{rate} is outside 0.0..=1.0"),
            ))
        }
    }
}
