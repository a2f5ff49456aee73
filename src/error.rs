use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// A body the extractors refused; only "too large" keeps its own status.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Gemini request failed: {0}")]
    Gateway(String),

    #[error("Gemini did not return valid JSON ({reason}). Raw response: {raw}")]
    Decode { reason: String, raw: String },

    #[error("Upload error: {0}")]
    Upload(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{action}: {source}")]
    Failed {
        action: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Attaches the user-facing action to anything that is not the caller's fault.
    pub fn during(self, action: &'static str) -> Self {
        match self {
            AppError::Validation(_) | AppError::Rejected { .. } | AppError::Failed { .. } => self,
            other => AppError::Failed {
                action,
                source: Box::new(other),
            },
        }
    }
}

impl AppError {
    fn rejected(status: StatusCode, message: String) -> Self {
        let status = if status == StatusCode::PAYLOAD_TOO_LARGE {
            status
        } else {
            StatusCode::BAD_REQUEST
        };
        AppError::Rejected { status, message }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::rejected(
            err.status(),
            format!("Malformed multipart body: {}", err.body_text()),
        )
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::rejected(rejection.status(), rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    details: None,
                },
            ),
            AppError::Rejected { status, message } => (
                status,
                ErrorResponse {
                    error: message,
                    details: None,
                },
            ),
            AppError::Failed { action, source } => {
                error!("{}: {}", action, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: action.to_string(),
                        details: Some(source.to_string()),
                    },
                )
            }
            other => {
                error!("unhandled error: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        details: Some(other.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
