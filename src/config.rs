//! Configuration loader and defaults for the hellod server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from
//! environment variables (with sensible defaults). The only field is the
//! HTTP listening port (`port`).
//!
use std::env;

use once_cell::sync::Lazy;

/// Default HTTP listening port
const DEFAULT_PORT: u16 = 8080;

/// Application configuration
pub struct Config {
    /// HTTP listening port
    pub port: u16,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    port: env::var("HELLOD_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT),
});
