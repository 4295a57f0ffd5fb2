//! Mapping of failures to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::response::ApiErrorResponse;
use crate::domain::catalog::RecordError;

/// Failure of an HTTP handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A use case failed.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The request body was not valid JSON for the resource.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl ApiError {
    /// HTTP status for this failure.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Record(RecordError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Record(RecordError::InvalidArgument(_)) | Self::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Record(RecordError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Record(err) => err.code(),
            Self::MalformedBody(_) => "MALFORMED_BODY",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedBody(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, %status, "Request rejected");
        }

        let body = ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
