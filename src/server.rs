//! Web server module for hellod.
//!
//! Provides the HTTP listener and the single request handler: every GET
//! request, on any path, gets a fixed `Hello, World!` response. Other
//! methods are left to axum's method-router default.
//!
use axum::{Router, http::header, response::IntoResponse, routing::get};
use tokio::net::TcpListener;

use crate::config::CONFIG;

/// Start the web server and serve until the process is terminated
pub async fn run() {
    let addr = format!("0.0.0.0:{}", CONFIG.port);
    let listener = TcpListener::bind(addr).await.unwrap();

    println!("Serving on port {}", CONFIG.port);

    axum::serve(listener, app()).await.unwrap();
}

/// Build the router: a single GET fallback, so every path matches
pub fn app() -> Router {
    Router::new().fallback(get(hello))
}

/// Respond to any GET request with a fixed 200 response
async fn hello() -> impl IntoResponse {
    // The header is set explicitly to keep the exact value `text/html`
    ([(header::CONTENT_TYPE, "text/html")], "Hello, World!")
}
