//! Ghost Token Service library.
//!
//! Mints short-lived HS256 admin tokens from a `<id>:<hex secret>` Ghost
//! Admin API key and serves them over HTTP.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod http;
pub mod jwt;
pub mod key_source;
pub mod logging;
pub mod metrics;
pub mod shutdown;

// Re-exports for convenience
pub use config::Config;
pub use error::TokenError;
pub use jwt::build_token;
