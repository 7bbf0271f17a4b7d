use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::{AppError, MESSAGE_REQUIRED},
    message::ChatRequest,
    state::SharedState,
};

/// Relay one chat turn to the backend and pass its JSON reply through.
///
/// The body is parsed by hand so a malformed payload is reported like any
/// other relay failure instead of as an extractor rejection.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let payload = ChatRequest::parse(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected chat request body");
        AppError::Internal(e.to_string())
    })?;

    let Some(message) = payload.message() else {
        return Err(AppError::BadRequest(MESSAGE_REQUIRED.to_string()));
    };

    tracing::debug!(session_id = ?payload.session_id, "forwarding chat message");

    match state
        .backend
        .forward_chat(message, payload.session_id.as_deref())
        .await
    {
        Ok(reply) => Ok(Json(reply)),
        Err(e) => {
            tracing::error!(error = %e, url = state.backend.chat_url(), "Chat API error");
            Err(AppError::Internal(e.to_string()))
        }
    }
}
