// src/message.rs
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request body is null")]
    NullBody,

    #[error("`{0}` must be a string")]
    NotAString(&'static str),
}

/// Body accepted by `POST /chat`.
///
/// `message` is `None` when it is absent or falsy (`null`, `false`, `0`,
/// `""`), and also when the body is not an object at all.
#[derive(Debug, Default)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub session_id: Option<String>,
}

impl ChatRequest {
    pub fn parse(body: &[u8]) -> Result<Self, RequestError> {
        let fields = match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => fields,
            Value::Null => return Err(RequestError::NullBody),
            _ => return Ok(Self::default()),
        };

        let message = match fields.get("message").filter(|v| is_truthy(v)) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(RequestError::NotAString("message")),
            None => None,
        };
        let session_id = match fields.get("session_id") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(_) => return Err(RequestError::NotAString("session_id")),
        };

        Ok(Self { message, session_id })
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Body forwarded to the backend's `/chat`.
#[derive(Debug, Serialize)]
pub struct BackendChatRequest<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
