//! hellod library crate.
//!
//! Exposes the `config` and `server` modules so the binary and the
//! integration tests can both build and serve the router.
//!
/// Configuration management and settings
pub mod config;
/// HTTP server implementation and request handling
pub mod server;
