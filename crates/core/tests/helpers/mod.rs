//! Test harness for transport integration tests.
//!
//! Spawns an in-process axum backend on an ephemeral port that answers
//! `POST /search` with a canned reply and records every request it receives.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;

/// What the mock backend answers with.
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(StatusCode),
    Html(&'static str),
}

/// A request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: Option<String>,
    pub body: Value,
}

struct BackendState {
    reply: Reply,
    received: Mutex<Vec<Received>>,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    state: Arc<BackendState>,
}

impl MockBackend {
    pub async fn spawn(reply: Reply) -> Self {
        let state = Arc::new(BackendState { reply, received: Mutex::new(Vec::new()) });
        let app = Router::new().route("/search", post(handle_search)).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend crashed");
        });

        MockBackend { addr, state }
    }

    pub fn origin(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn received(&self) -> Vec<Received> {
        self.state.received.lock().expect("poisoned").clone()
    }
}

async fn handle_search(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.received.lock().expect("poisoned").push(Received { content_type, body });

    match &state.reply {
        Reply::Json(v) => Json(v.clone()).into_response(),
        Reply::Status(code) => (*code, "backend error").into_response(),
        Reply::Html(html) => ([(header::CONTENT_TYPE, "text/html")], *html).into_response(),
    }
}

/// An origin nothing is listening on.
pub async fn dead_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{addr}")
}
