use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error body returned to API clients: `{"error": <status>, "message": <text>}`.
#[derive(Serialize)]
struct ErrorBody {
    error: u16,
    message: String,
}

/// Typed failures raised by the link store and surfaced unchanged to clients.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed encode request: missing `long_url`, or a caller-supplied `short_url`.
    #[error("{message}")]
    InvalidRequest { message: String },

    /// The long URL has already been encoded.
    #[error("{message}")]
    DuplicateUrl { message: String },

    /// The short URL was never issued by this store.
    #[error("{message}")]
    NotFound { message: String },
}

impl AppError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::DuplicateUrl {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// The HTTP status this error maps to at the boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest { .. } | AppError::DuplicateUrl { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = ErrorBody {
            error: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::invalid_request(errors.to_string())
    }
}
