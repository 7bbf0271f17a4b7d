// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const CHAT_FAILED: &str = "Failed to process chat request";

/// Errors returned to HTTP callers.
///
/// `Internal` carries the operator-facing reason; the client only ever sees
/// the generic message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, CHAT_FAILED.to_string()),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
