//! Route table.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | / | `greetings` |
//! | GET | /encode/{plaintext}/{shift} | `encode` |
//! | GET | /decode/{ciphertext}/{shift} | `decode` |
//! | GET | /health | `health_check` |

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{decode, encode, greetings, health_check, not_found};

/// Builds the router with request tracing attached.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(greetings))
        .route("/encode/{plaintext}/{shift}", get(encode))
        .route("/decode/{ciphertext}/{shift}", get(decode))
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
