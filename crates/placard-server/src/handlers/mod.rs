//! HTTP route handlers for the placard server.

pub mod message;
pub mod page;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
