//! Liveness probe.

/// Handle GET /health.
pub async fn health() -> &'static str {
    "ok"
}
