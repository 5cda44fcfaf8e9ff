use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::Uri;
use axum::Json;

use super::dto::{CipherResponse, GreetingResponse, HealthResponse, PlainResponse};
use crate::core::{caesar, Shift};
use crate::utils::error::{Result, ServiceError};

pub const WELCOME_MESSAGE: &str = "Welcome to ciphers service!";

/// GET /
pub async fn greetings() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// GET /encode/{plaintext}/{shift}
///
/// The plaintext segment arrives percent-decoded. A segment that is not
/// UTF-8, or a shift that is not an `i64`, is answered with 400.
pub async fn encode(
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<CipherResponse>> {
    let Path((plaintext, shift)) = path?;
    let shift: Shift = shift.parse()?;
    let cipher = caesar::encode(&plaintext, shift.value());
    tracing::debug!(shift = %shift, chars = cipher.chars().count(), "encoded text");
    Ok(Json(CipherResponse { cipher }))
}

/// GET /decode/{ciphertext}/{shift}
pub async fn decode(
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<PlainResponse>> {
    let Path((ciphertext, shift)) = path?;
    let shift: Shift = shift.parse()?;
    let plain = caesar::decode(&ciphertext, shift.value());
    tracing::debug!(shift = %shift, chars = plain.chars().count(), "decoded text");
    Ok(Json(PlainResponse { plain }))
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn not_found(uri: Uri) -> ServiceError {
    ServiceError::NotFound {
        path: uri.path().to_string(),
    }
}
