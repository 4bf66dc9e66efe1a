use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn create_system_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

/// Página de inicio
async fn index() -> &'static str {
    "Vehicle search service - GET /vehicles, POST /vehicles, GET /searchby{make,model,year,color}/<term>[/s=<start>e=<end>]"
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicle-search",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
