use axum::Json;
use serde_json::{json, Value};

use crate::api::response::ApiResponse;

/// GET /health - Liveness probe, no auth
pub async fn health() -> Json<ApiResponse<Value>> {
    Json(ApiResponse::success(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
