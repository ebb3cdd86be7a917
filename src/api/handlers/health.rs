//! Liveness endpoint.

use axum::Json;
use serde_json::{Value, json};

/// `GET /health` - always answers, used by deploy probes.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
