//! Random bar chart — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use barchart_core::error::DomainError;
use barchart_render::RenderError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad input from the caller.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The chart could not be drawn.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ApiError {
    /// Status code and machine-readable code for this error.
    #[must_use]
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Domain(DomainError::InvalidRange { .. }) => {
                (StatusCode::BAD_REQUEST, "invalid_range")
            }
            ApiError::Domain(DomainError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
            ApiError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "render_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        let response = err.into().into_response();
        response.status()
    }

    #[test]
    fn test_invalid_range_maps_to_400() {
        assert_eq!(
            status_of(DomainError::InvalidRange {
                lower: 100,
                upper: 50
            }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(DomainError::Validation("bad input".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_render_failure_maps_to_500() {
        assert_eq!(
            status_of(RenderError::Draw("backend gone".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let range = ApiError::from(DomainError::InvalidRange { lower: 2, upper: 1 });
        let validation = ApiError::from(DomainError::Validation("x".into()));
        assert_eq!(range.status_and_code().1, "invalid_range");
        assert_eq!(validation.status_and_code().1, "validation_error");
    }
}
