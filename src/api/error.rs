use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::dto::ErrorResponse;
use crate::utils::error::ServiceError;

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidShift { .. } | Self::InvalidPath { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath {
            reason: rejection.body_text(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::debug!("Rejected request: {}", self);
        } else {
            tracing::error!("❌ Request failed: {}", self);
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let invalid = ServiceError::InvalidShift {
            value: "x".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let bad_path = ServiceError::InvalidPath {
            reason: "Invalid URL: Invalid UTF-8 in `plaintext`".to_string(),
        };
        assert_eq!(bad_path.status_code(), StatusCode::BAD_REQUEST);
        assert!(bad_path.is_client_error());

        let missing = ServiceError::NotFound {
            path: "/nope".to_string(),
        };
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let config = ServiceError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
