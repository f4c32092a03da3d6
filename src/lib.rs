pub mod config;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod views;

pub use config::{Config, ConfigError};
pub use observability::{init_observability, shutdown_observability, Metrics};
pub use routes::{create_router, AppState};

use std::sync::Arc;

use crate::repositories::{CatalogTable, InMemoryCatalogRepository};
use crate::services::CatalogService;

/// Build the application state from configuration: catalog table, resolver mode, metrics
pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let table = match &config.catalog.data_path {
        Some(path) => CatalogTable::from_path(path)?,
        None => CatalogTable::seed()?,
    };
    let metrics = Arc::new(
        Metrics::new().map_err(|e| anyhow::anyhow!("Failed to initialize metrics: {}", e))?,
    );

    let catalog = CatalogService::new(
        Arc::new(InMemoryCatalogRepository::new(table)),
        config.catalog.resolver_mode()?,
    )
    .with_assets_base_url(config.catalog.assets_base_url.clone())
    .with_metrics(metrics.clone());

    Ok(AppState {
        catalog: Arc::new(catalog),
        metrics,
        service_name: config.observability.service_name.clone(),
        request_timeout: config.server.request_timeout(),
    })
}
