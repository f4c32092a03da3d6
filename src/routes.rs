use axum::{extract::FromRef, middleware, routing::get, Router};
use std::{sync::Arc, time::Duration};
use tower_http::{cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer};

use crate::handlers::{
    api, health_check, metrics_handler, pages, request_id_middleware,
    security_headers_middleware,
};
use crate::observability::{observability_middleware, Metrics};
use crate::services::CatalogService;

/// Directory holding the catalog images referenced as `/name.jpeg`
pub const PUBLIC_DIR: &str = "public";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub metrics: Arc<Metrics>,
    /// Reported by the health endpoint
    pub service_name: String,
    pub request_timeout: Duration,
}

impl FromRef<AppState> for Arc<Metrics> {
    fn from_ref(state: &AppState) -> Self {
        state.metrics.clone()
    }
}

/// Build the full router: pages, JSON API, health, metrics and static images
pub fn create_router(state: AppState, public_dir: &str) -> Router {
    let api = Router::new()
        .route("/api/categories", get(api::list_categories))
        .route("/api/categories/:category", get(api::get_category))
        .route("/api/categories/:category/:id", get(api::get_service))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(pages::home))
        .route("/categories", get(pages::categories))
        .route("/categories/:category", get(pages::listing))
        .route("/categories/:category/:id", get(pages::detail))
        .route("/health/status", get(health_check))
        .route("/metrics", get(metrics_handler))
        .merge(api)
        .fallback_service(ServeDir::new(public_dir))
        // Order matters: the last layer added runs first. The timeout must stay
        // inside the observability layer.
        .layer(TimeoutLayer::new(state.request_timeout))
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            observability_middleware,
        ))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResolverMode;
    use crate::repositories::InMemoryCatalogRepository;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app(mode: ResolverMode) -> Router {
        let metrics = Arc::new(Metrics::new().unwrap());
        let repository = Arc::new(InMemoryCatalogRepository::seeded().unwrap());
        let catalog = CatalogService::new(repository, mode).with_metrics(metrics.clone());
        create_router(
            AppState {
                catalog: Arc::new(catalog),
                metrics,
                service_name: "celebrations-test".to_string(),
                request_timeout: Duration::from_secs(30),
            },
            PUBLIC_DIR,
        )
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String, axum::http::HeaderMap) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap(), headers)
    }

    #[tokio::test]
    async fn test_detail_page_found() {
        let (status, body, headers) = get(
            app(ResolverMode::Keyed),
            "/categories/candlelight-dinners/romantic-dinner",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers.get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert!(headers.contains_key("x-request-id"));
        assert!(body.contains("<h1>Romantic Candlelight Dinner</h1>"));
        assert!(body.contains("₹8,000"));
        assert!(body.contains("Back to Candlelight Dinners"));
    }

    #[tokio::test]
    async fn test_detail_page_not_found_in_keyed_mode() {
        let (status, body, _) = get(
            app(ResolverMode::Keyed),
            "/categories/candlelight-dinners/no-such-dinner",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Service Not Found"));
        assert!(!body.contains("detail-grid"));
    }

    #[tokio::test]
    async fn test_fixed_mode_answers_any_id() {
        let (status, body, _) = get(
            app(ResolverMode::Fixed),
            "/categories/private-beach-dinner/anything",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Romantic Candlelight Dinner</h1>"));
        assert!(body.contains("Back to Private Beach Dinner"));
    }

    #[tokio::test]
    async fn test_listing_and_unknown_category() {
        let (status, body, _) = get(app(ResolverMode::Keyed), "/categories/balloon-bouquet").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"href="/categories/balloon-bouquet/balloon-decoration""#));

        let (status, body, _) = get(app(ResolverMode::Keyed), "/categories/cakes").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Category Not Found"));
    }

    #[tokio::test]
    async fn test_home_and_index_pages() {
        let (status, body, _) = get(app(ResolverMode::Keyed), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"href="/categories/candlelight-dinners""#));

        let (status, body, _) = get(app(ResolverMode::Keyed), "/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Our Categories"));
    }

    #[tokio::test]
    async fn test_api_routes() {
        let (status, body, headers) = get(app(ResolverMode::Keyed), "/api/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["total_count"], 2);

        let (status, body, _) = get(
            app(ResolverMode::Keyed),
            "/api/categories/balloon-bouquet/premium-balloon-bouquet",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["price"], "₹2,500");

        let (status, body, _) =
            get(app(ResolverMode::Keyed), "/api/categories/balloon-bouquet/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["id"], "nope");
    }

    #[tokio::test]
    async fn test_health_reports_mode() {
        let (status, body, _) = get(app(ResolverMode::Fixed), "/health/status").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["resolver_mode"], "fixed");
        assert_eq!(json["service"], "celebrations-test");
        assert_eq!(json["categories"], 2);
    }

    #[tokio::test]
    async fn test_query_string_does_not_change_detail_page() {
        let (status, body, _) = get(
            app(ResolverMode::Keyed),
            "/categories/candlelight-dinners/romantic-dinner?name=Jane&phone=555",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("Jane"));
        assert!(!body.contains(r#"type="submit""#));
    }

    #[tokio::test]
    async fn test_placeholder_image_is_served() {
        let (status, body, headers) = get(app(ResolverMode::Keyed), "/placeholder.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers.get("content-type").unwrap(), "image/svg+xml");
        assert!(body.starts_with("<svg"));
    }

    #[tokio::test]
    async fn test_unknown_static_file_is_404() {
        let (status, _, headers) = get(app(ResolverMode::Keyed), "/missing-image.jpeg").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(headers.contains_key("x-frame-options"));
    }
}
