//! hellod crate entrypoint.
//!
//! Starts the Tokio runtime and launches the web server defined in the
//! `server` module. Keep this file minimal; all logic lives in `server`
//! and `config`.
//!
/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() {
    hellod::server::run().await;
}
