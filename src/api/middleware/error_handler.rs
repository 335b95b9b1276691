//! Converts `AppError` into HTTP responses.
//!
//! Client errors carry a `{"error": "<message>"}` body. Internal errors are
//! logged here and answered with a bare 500 so no detail leaks.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// # Status Code Mapping
    /// - BadRequest → 400 BAD_REQUEST with JSON body
    /// - Matrix, Image, Internal → 500 INTERNAL_SERVER_ERROR, empty body
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest { message } => {
                tracing::debug!(message = %message, "Rejected request");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
            }
            internal => {
                tracing::error!(error = ?internal, "Internal error while handling request");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
