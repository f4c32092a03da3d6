use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::models::{Category, CategoryListResponse, ServiceData, ServiceError};
use crate::routes::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<Value>)>;

/// List all categories
#[instrument(name = "api_list_categories", skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<CategoryListResponse> {
    let response = state
        .catalog
        .list_categories()
        .await
        .map_err(service_error_to_response)?;

    info!("Returning {} categories", response.total_count);
    Ok(Json(response))
}

/// One category with its service summaries
#[instrument(name = "api_get_category", skip(state), fields(category = %category))]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Category> {
    state
        .catalog
        .get_listing(&category)
        .await
        .map(Json)
        .map_err(service_error_to_response)
}

/// Detail record for one service
#[instrument(name = "api_get_service", skip(state), fields(category = %category, id = %id))]
pub async fn get_service(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
) -> ApiResult<ServiceData> {
    state
        .catalog
        .get_service(&category, &id)
        .await
        .map(Json)
        .map_err(service_error_to_response)
}

/// Map a service error to a status code and JSON error body
pub fn service_error_to_response(err: ServiceError) -> (StatusCode, Json<Value>) {
    let timestamp = chrono::Utc::now().to_rfc3339();

    let (status, body) = match &err {
        ServiceError::CategoryNotFound { slug } => (
            StatusCode::NOT_FOUND,
            json!({ "error": err.to_string(), "category": slug, "timestamp": timestamp }),
        ),
        ServiceError::ServiceNotFound { category, id } => (
            StatusCode::NOT_FOUND,
            json!({
                "error": err.to_string(),
                "category": category,
                "id": id,
                "timestamp": timestamp,
            }),
        ),
        ServiceError::ValidationError { .. } => (
            StatusCode::BAD_REQUEST,
            json!({ "error": err.to_string(), "timestamp": timestamp }),
        ),
        ServiceError::TransientFailure { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "error": "Catalog temporarily unavailable", "timestamp": timestamp }),
        ),
        ServiceError::Repository { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "Internal server error", "timestamp": timestamp }),
        ),
    };

    if status.is_server_error() {
        crate::error_with_trace!(error = %err, "API request failed");
    }

    (status, Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RepositoryError;

    #[test]
    fn test_error_status_mapping() {
        let (status, Json(body)) = service_error_to_response(ServiceError::ServiceNotFound {
            category: "balloon-bouquet".to_string(),
            id: "giant-heart".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["category"], "balloon-bouquet");
        assert_eq!(body["id"], "giant-heart");
        assert!(body["timestamp"].is_string());

        let (status, _) = service_error_to_response(ServiceError::CategoryNotFound {
            slug: "cakes".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, Json(body)) = service_error_to_response(ServiceError::TransientFailure {
            message: "secret internals".to_string(),
        });
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!body["error"].as_str().unwrap().contains("secret"));

        let (status, _) = service_error_to_response(ServiceError::ValidationError {
            message: "bad".to_string(),
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = service_error_to_response(ServiceError::Repository {
            source: RepositoryError::NotFound,
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
