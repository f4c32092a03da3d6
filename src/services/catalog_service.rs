use std::sync::Arc;
use tracing::{debug, instrument};

use crate::models::{
    is_slug, Category, CategoryListResponse, DetailPage, LookupOutcome, RepositoryError,
    Resolution, ResolverMode, ServiceData, ServiceError, ServiceResult,
};
use crate::observability::Metrics;
use crate::repositories::{seed, CatalogRepository};

/// Catalog listing and detail resolution
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
    mode: ResolverMode,
    assets_base_url: String,
    metrics: Option<Arc<Metrics>>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>, mode: ResolverMode) -> Self {
        Self {
            repository,
            mode,
            assets_base_url: String::new(),
            metrics: None,
        }
    }

    /// Prefix root-relative image references with `assets_base_url`
    pub fn with_assets_base_url(mut self, assets_base_url: impl Into<String>) -> Self {
        self.assets_base_url = assets_base_url.into();
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn mode(&self) -> ResolverMode {
        self.mode
    }

    /// Every category in table order
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<CategoryListResponse> {
        let categories = match self.repository.list_categories().await {
            Ok(categories) => categories,
            Err(err) => return Err(self.transient("list_categories", err)),
        };
        self.record("list_categories", LookupOutcome::Found);

        let categories: Vec<_> = categories.iter().map(Category::summary).collect();
        let total_count = categories.len();
        crate::info_with_trace!("Listed {} categories", total_count);

        Ok(CategoryListResponse {
            categories,
            total_count,
        })
    }

    /// One category with its summaries in table order
    #[instrument(skip(self))]
    pub async fn get_listing(&self, slug: &str) -> ServiceResult<Category> {
        if !is_slug(slug) {
            self.record("listing", LookupOutcome::NotFound);
            return Err(ServiceError::CategoryNotFound {
                slug: slug.to_string(),
            });
        }

        match self.repository.find_category(slug).await {
            Ok(Some(category)) => {
                self.record("listing", LookupOutcome::Found);
                Ok(category.with_assets_base(&self.assets_base_url))
            }
            Ok(None) => {
                self.record("listing", LookupOutcome::NotFound);
                crate::warn_with_trace!(slug = %slug, "Unknown category");
                Err(ServiceError::CategoryNotFound {
                    slug: slug.to_string(),
                })
            }
            Err(err) => Err(self.transient("listing", err)),
        }
    }

    /// Resolve a detail route to a service record.
    ///
    /// Identical inputs always give identical output. In `fixed` mode the
    /// placeholder record is returned for any input without touching the repository.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub async fn resolve(&self, category: &str, id: &str) -> ServiceResult<Resolution> {
        if self.mode == ResolverMode::Fixed {
            self.record("resolve", LookupOutcome::Found);
            return Ok(Resolution::Found {
                service: seed::placeholder_service(id).with_assets_base(&self.assets_base_url),
            });
        }

        let not_found = || Resolution::NotFound {
            category: category.to_string(),
            id: id.to_string(),
        };

        // Route segments that are not slugs can never match a catalog key
        if !is_slug(category) || !is_slug(id) {
            debug!("Route parameters are not catalog keys");
            self.record("resolve", LookupOutcome::NotFound);
            return Ok(not_found());
        }

        match self.repository.find_service(category, id).await {
            Ok(Some(service)) => {
                self.record("resolve", LookupOutcome::Found);
                Ok(Resolution::Found {
                    service: service.with_assets_base(&self.assets_base_url),
                })
            }
            Ok(None) => {
                self.record("resolve", LookupOutcome::NotFound);
                crate::info_with_trace!("No service for {}/{}", category, id);
                Ok(not_found())
            }
            Err(err) => Err(self.transient("resolve", err)),
        }
    }

    /// Like `resolve`, but a missing service is an error
    pub async fn get_service(&self, category: &str, id: &str) -> ServiceResult<ServiceData> {
        match self.resolve(category, id).await? {
            Resolution::Found { service } => Ok(service),
            Resolution::NotFound { category, id } => {
                Err(ServiceError::ServiceNotFound { category, id })
            }
        }
    }

    /// Drive a detail page through one load cycle for the given route parameters
    pub async fn load_detail(
        &self,
        page: &mut DetailPage,
        category: Option<&str>,
        id: Option<&str>,
    ) {
        let Some(ticket) = page.on_params(category, id) else {
            return;
        };

        let outcome = {
            let params = ticket.params();
            self.resolve(&params.category, &params.id).await
        };
        page.complete(ticket, outcome);
    }

    fn transient(&self, operation: &str, err: RepositoryError) -> ServiceError {
        self.record(operation, LookupOutcome::Failed);
        crate::error_with_trace!(operation = %operation, error = %err, "Catalog lookup failed");
        ServiceError::TransientFailure {
            message: err.to_string(),
        }
    }

    fn record(&self, operation: &str, outcome: LookupOutcome) {
        if let Some(metrics) = &self.metrics {
            metrics.record_lookup(operation, outcome);
        }
    }
}
