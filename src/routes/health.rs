//! Health check endpoint for container orchestration.

/// Liveness probe - only checks that the process can respond to HTTP.
pub async fn health() -> &'static str {
    "ok"
}
