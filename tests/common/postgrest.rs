//! A fake `PostgREST` backend.
//!
//! It serves the two table endpoints the gateway reads, from in-memory rows,
//! and it only answers requests authenticated with its service key.
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

#[derive(Clone, Default)]
pub struct Backend {
    pub service_key: String,
    /// Rows with `integration_api_key` and `is_active`.
    pub configurations: Vec<Value>,
    /// Rows with the lead columns and the embedded `landing_page`.
    pub leads: Vec<Value>,
    /// Time to wait before answering any request.
    pub delay: Duration,
}

pub struct FakePostgrest {
    pub address: SocketAddr,
    task: JoinHandle<()>,
}

impl FakePostgrest {
    pub async fn start(backend: Backend) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let router = Router::new()
            .route("/rest/v1/configurations", get(configurations))
            .route("/rest/v1/leads", get(leads))
            .with_state(Arc::new(backend));

        let task = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { address, task }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.address)
    }

    pub fn stop(self) {
        self.task.abort();
    }
}

fn is_authorized(backend: &Backend, headers: &HeaderMap) -> bool {
    let api_key = headers.get("apikey").and_then(|v| v.to_str().ok());
    let authorization = headers.get("authorization").and_then(|v| v.to_str().ok());

    api_key == Some(backend.service_key.as_str()) && authorization == Some(format!("Bearer {}", backend.service_key).as_str())
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid API key" }))).into_response()
}

fn limited(rows: Vec<Value>, params: &HashMap<String, String>) -> Vec<Value> {
    match params.get("limit").and_then(|limit| limit.parse::<usize>().ok()) {
        Some(limit) => rows.into_iter().take(limit).collect(),
        None => rows,
    }
}

async fn configurations(
    State(backend): State<Arc<Backend>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    tokio::time::sleep(backend.delay).await;

    if !is_authorized(&backend, &headers) {
        return unauthorized();
    }

    let only_active = params.get("is_active").map(String::as_str) == Some("eq.true");

    let rows = backend
        .configurations
        .iter()
        .filter(|row| !only_active || row["is_active"] == json!(true))
        .map(|row| json!({ "integration_api_key": row["integration_api_key"] }))
        .collect();

    Json(limited(rows, &params)).into_response()
}

async fn leads(
    State(backend): State<Arc<Backend>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    tokio::time::sleep(backend.delay).await;

    if !is_authorized(&backend, &headers) {
        return unauthorized();
    }

    let Some(id) = params.get("id").and_then(|filter| filter.strip_prefix("eq.")) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "missing id filter" }))).into_response();
    };

    let rows = backend.leads.iter().filter(|row| row["id"] == json!(id)).cloned().collect();

    Json(limited(rows, &params)).into_response()
}
