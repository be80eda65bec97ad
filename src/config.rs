//! Service configuration.
//!
//! Loaded from environment variables (and a `.env` file when present) at
//! startup. The admin key itself is not part of this struct: it is read on
//! every request through [`crate::key_source::EnvKeySource`].

use crate::error::TokenError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Human-readable output
    Pretty,
}

impl FromStr for LogFormat {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            _ => Err(TokenError::config(format!("Invalid LOG_FORMAT: {s}"))),
        }
    }
}

/// Token service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// How long in-flight requests may run after a shutdown signal
    pub shutdown_timeout: Duration,
    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but invalid.
    pub fn from_env() -> Result<Self, TokenError> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_env("PORT", 3000)?;
        let shutdown_timeout = Duration::from_secs(parse_env("SHUTDOWN_TIMEOUT", 10)?);
        let log_format = parse_env("LOG_FORMAT", LogFormat::Json)?;

        Ok(Self {
            host,
            port,
            shutdown_timeout,
            log_format,
        })
    }

    /// Socket address string for the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse environment variable with default value.
fn parse_env<T: FromStr>(name: &str, default: T) -> Result<T, TokenError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| TokenError::config(format!("Invalid {name}: {e}"))),
        Err(_) => Ok(default),
    }
}
