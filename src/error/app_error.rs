use axum::extract::rejection::QueryRejection;
use thiserror::Error;
use validator::ValidationErrors;

/// Application-wide error type for the HTTP surface.
///
/// Client mistakes surface as [`AppError::BadRequest`] with a single message.
/// Every other variant is an internal failure whose detail stays in the logs.
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// The QR encoder could not build a symbol for the contents
    #[error("QR matrix encoding failed")]
    Matrix {
        #[source]
        source: qrcodegen::DataTooLong,
    },

    /// The raster codec could not serialize the bitmap
    #[error("Image encoding failed: {format}")]
    Image {
        format: &'static str,
        #[source]
        source: image::ImageError,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }

    /// True for errors caused by the client rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::BadRequest { .. })
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<qrcodegen::DataTooLong> for AppError {
    fn from(error: qrcodegen::DataTooLong) -> Self {
        AppError::Matrix { source: error }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

/// Validation reports exactly one failure, so the first recorded message
/// becomes the response message.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|errors| errors.iter())
            .next()
            .map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            })
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::BadRequest { message }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use validator::ValidationError;

    #[test]
    fn test_validation_errors_use_message() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "size",
            ValidationError::new("range").with_message(Cow::Borrowed("out of bounds")),
        );

        match AppError::from(errors) {
            AppError::BadRequest { message } => assert_eq!(message, "out of bounds"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_errors_fall_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("type", ValidationError::new("unsupported_type"));

        match AppError::from(errors) {
            AppError::BadRequest { message } => assert_eq!(message, "unsupported_type"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AppError::bad_request("nope").is_client_error());
        assert!(!AppError::from(anyhow::anyhow!("boom")).is_client_error());
        assert!(!AppError::from(qrcodegen::DataTooLong::SegmentTooLong).is_client_error());
    }

    #[test]
    fn test_display_hides_source_detail() {
        let err = AppError::from(anyhow::anyhow!("secret path /tmp/x"));
        assert_eq!(err.to_string(), "Internal error");
    }
}
