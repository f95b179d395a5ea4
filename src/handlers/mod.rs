pub mod auth;
pub mod updates;

use axum::Json;
use serde_json::{Value, json};

/// GET / — plain-text liveness string for eyeballing a deployment.
pub async fn root() -> &'static str {
    "Work-log backend is running"
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
