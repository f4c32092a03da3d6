use std::sync::Arc;
use std::time::Duration;

use celebrations_rs::{
    create_router,
    models::ResolverMode,
    repositories::{CatalogTable, InMemoryCatalogRepository},
    routes::PUBLIC_DIR,
    services::CatalogService,
    AppState, Metrics,
};
use reqwest::{Client, Response};
use tokio::net::TcpListener;

/// The real router served on an ephemeral local port
pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
    pub metrics: Arc<Metrics>,
}

impl TestEnvironment {
    pub async fn new(mode: ResolverMode) -> Self {
        Self::with_table(CatalogTable::seed().expect("seed catalog is valid"), mode).await
    }

    pub async fn with_table(table: CatalogTable, mode: ResolverMode) -> Self {
        let metrics = Arc::new(Metrics::new().expect("Failed to create metrics"));
        let catalog = CatalogService::new(Arc::new(InMemoryCatalogRepository::new(table)), mode)
            .with_metrics(metrics.clone());
        let app = create_router(
            AppState {
                catalog: Arc::new(catalog),
                metrics: metrics.clone(),
                service_name: "celebrations-rs".to_string(),
                request_timeout: Duration::from_secs(30),
            },
            PUBLIC_DIR,
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind listener");
        let addr = listener.local_addr().expect("Failed to get local address");
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Failed to serve app");
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(50)).await;

        Self {
            client: Client::new(),
            base_url,
            metrics,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request")
    }
}

/// Every `href="..."` value in a page, in document order
pub fn hrefs(html: &str) -> Vec<String> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(|href| href.to_string())
        .collect()
}
