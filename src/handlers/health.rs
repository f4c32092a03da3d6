use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use tracing::instrument;

use crate::routes::AppState;

/// Health check endpoint handler
#[instrument(name = "health_check", skip(state))]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (status, code, categories) = match state.catalog.list_categories().await {
        Ok(response) => ("healthy", StatusCode::OK, response.total_count),
        Err(_) => ("degraded", StatusCode::SERVICE_UNAVAILABLE, 0),
    };

    (
        code,
        Json(json!({
            "status": status,
            "service": state.service_name,
            "version": env!("CARGO_PKG_VERSION"),
            "resolver_mode": state.catalog.mode().to_string(),
            "categories": categories,
            "timestamp": chrono::Utc::now().to_rfc3339()
        })),
    )
}
