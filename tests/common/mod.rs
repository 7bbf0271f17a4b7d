#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chat_relay::{
    config::PageConfig, routes::create_router, services::backend_client::BackendClient,
    state::AppState,
};
use serde_json::Value;

/// In-process stand-in for the chat backend.
pub struct MockBackend {
    status: StatusCode,
    body: String,
    calls: AtomicUsize,
    last_request: Mutex<Option<Value>>,
}

impl MockBackend {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<Value> {
        self.last_request.lock().unwrap().clone()
    }
}

async fn mock_chat(State(mock): State<Arc<MockBackend>>, body: Bytes) -> Response {
    mock.calls.fetch_add(1, Ordering::SeqCst);
    *mock.last_request.lock().unwrap() = serde_json::from_slice(&body).ok();
    (
        mock.status,
        [(header::CONTENT_TYPE, "application/json")],
        mock.body.clone(),
    )
        .into_response()
}

/// Start a backend answering every `POST /chat` with `status` and `body`.
pub async fn spawn_backend(status: StatusCode, body: &str) -> (String, Arc<MockBackend>) {
    let mock = Arc::new(MockBackend {
        status,
        body: body.to_string(),
        calls: AtomicUsize::new(0),
        last_request: Mutex::new(None),
    });
    let app = Router::new()
        .route("/chat", post(mock_chat))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), mock)
}

/// A base URL nothing is listening on.
pub async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn relay_app(backend_url: &str) -> Router {
    let backend = BackendClient::new(backend_url, None).unwrap();
    let state = Arc::new(AppState::new(backend, PageConfig::default()));
    create_router(concat!(env!("CARGO_MANIFEST_DIR"), "/public")).with_state(state)
}
