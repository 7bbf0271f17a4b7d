// src/services/backend_client.rs
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::message::BackendChatRequest;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to reach chat backend: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("{message}")]
    Backend { status: StatusCode, message: String },

    #[error("chat backend returned invalid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP client for the external chat backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    chat_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            chat_url: format!("{}/chat", base_url.trim_end_matches('/')),
        })
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    /// Forward one chat turn and return the backend's JSON body untouched.
    pub async fn forward_chat(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<Value, RelayError> {
        let response = self
            .client
            .post(&self.chat_url)
            .json(&BackendChatRequest { message, session_id })
            .send()
            .await
            .map_err(RelayError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable body falls through to the status-code message.
            let body = response.bytes().await.unwrap_or_default();
            return Err(RelayError::Backend {
                status,
                message: extract_backend_error(status, &body),
            });
        }

        response.json::<Value>().await.map_err(RelayError::Decode)
    }
}

/// Pull `detail.error` out of a backend error body.
pub fn extract_backend_error(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.pointer("/detail/error"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Backend responded with status: {}", status.as_u16()))
}
