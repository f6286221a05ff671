/**
 * Error Conversion Implementations
 *
 * Converts `ApiError` into an HTTP response so handlers can return it
 * directly with `?`. Validation errors carry their message in a JSON
 * body; everything else responds with an empty body, matching the
 * contract that store and credential failures leak no detail.
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::error::types::ApiError;

impl ApiError {
    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            // Store and infra failures surface as opaque 400s
            Self::Store(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Validation(message) => {
                tracing::warn!(error = %self, "Request rejected");
                let body = Json(serde_json::json!({ "error": message }));
                (status, body).into_response()
            }
            ApiError::Store(_) | ApiError::Internal(_) => {
                tracing::error!(error = %self, "Request failed");
                status.into_response()
            }
            _ => {
                tracing::warn!(error = %self, "Request rejected");
                status.into_response()
            }
        }
    }
}
