//! Stub scoring backend for integration tests.
//!
//! Spawns a local HTTP server that mimics the scoring service's evaluate
//! route: it accepts the parallel-array payload and answers with one score
//! row per record. Two misbehaving variants cover the failure taxonomy.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Payload shape as the backend sees it, mirroring the wire contract.
#[derive(Debug, Deserialize)]
pub struct ReceivedPayload {
    pub llm_outputs: Vec<String>,
    pub ground_truths: Vec<String>,
    pub queries: Vec<String>,
    pub contexts: Vec<String>,
}

pub struct StubBackend {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl StubBackend {
    pub fn evaluate_url(&self) -> String {
        format!("http://{}/evaluate", self.addr)
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Answers every record with a fixed set of metric fields, like the real
/// scoring service's per-record rows.
async fn evaluate_handler(Json(payload): Json<ReceivedPayload>) -> Json<Value> {
    let rows: Vec<Value> = payload
        .queries
        .iter()
        .zip(&payload.llm_outputs)
        .zip(&payload.ground_truths)
        .zip(&payload.contexts)
        .map(|(((query, output), ground_truth), context)| {
            let exact = if output == ground_truth { 1.0 } else { 0.0 };
            json!({
                "query": query,
                "prediction": output,
                "ground_truth": ground_truth,
                "context": context,
                "exact_match": exact,
                "f1": exact,
            })
        })
        .collect();

    Json(Value::Array(rows))
}

async fn rejecting_handler() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "scoring unavailable"})),
    )
}

async fn garbled_handler() -> impl IntoResponse {
    // 200 OK, but the body is not JSON.
    (StatusCode::OK, "this is not json")
}

/// Spawns a well-behaved stub backend.
pub async fn spawn_stub_backend() -> StubBackend {
    spawn_with_router(Router::new().route("/evaluate", post(evaluate_handler))).await
}

/// Spawns a backend whose evaluate route always answers 500.
pub async fn spawn_rejecting_backend() -> StubBackend {
    spawn_with_router(Router::new().route("/evaluate", post(rejecting_handler))).await
}

/// Spawns a backend whose evaluate route answers 200 with a non-JSON body.
pub async fn spawn_garbled_backend() -> StubBackend {
    spawn_with_router(Router::new().route("/evaluate", post(garbled_handler))).await
}

async fn spawn_with_router(app: Router) -> StubBackend {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind stub backend");
    let addr = listener.local_addr().expect("listener should have an addr");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .expect("stub backend should serve");
    });

    StubBackend {
        addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    }
}
