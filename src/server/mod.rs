//! # HTTP Server for Advisory Receipts
//!
//! Serves print-ready receipt pages built from the request's query string.
//!
//! ## Usage
//!
//! ```bash
//! advisory-receipt serve --listen 0.0.0.0:8080
//! ```
//!
//! Then open `http://localhost:8080/?problem_name_en=Blast&category=Fungal`
//! in a browser; the print dialog opens once the page has rendered.
//!
//! ## Routes
//!
//! | Route | Layout |
//! |-------|--------|
//! | `GET /` | label |
//! | `GET /receipt/label` | label |
//! | `GET /receipt/roll` | roll |
//! | `GET /health` | liveness |

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::ReceiptError;

/// Build the router. Separate from [`serve`] so it can be driven in tests.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::receipt::label))
        .route("/receipt/label", get(handlers::receipt::label))
        .route("/receipt/roll", get(handlers::receipt::roll))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use advisory_receipt::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), advisory_receipt::error::ReceiptError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), ReceiptError> {
    let app_state = Arc::new(AppState::new(config.clone()));
    let app = router(app_state);

    tracing::info!(listen = %config.listen_addr, "advisory receipt server starting");
    if config.auto_print {
        tracing::info!(delay_ms = config.print_delay.as_millis() as u64, "auto-print enabled");
    } else {
        tracing::info!("auto-print disabled (preview mode)");
    }

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            ReceiptError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ReceiptError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
