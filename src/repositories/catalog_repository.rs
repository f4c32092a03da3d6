use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::models::{Category, RepositoryResult, ServiceData};

use super::CatalogTable;

/// Trait defining the interface for catalog data access
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All categories in display order
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;

    /// Find a category by its slug
    async fn find_category(&self, slug: &str) -> RepositoryResult<Option<Category>>;

    /// Find the detail record for a service within a category
    async fn find_service(&self, category: &str, id: &str)
        -> RepositoryResult<Option<ServiceData>>;
}

/// Catalog repository over an immutable in-memory table
#[derive(Debug, Clone)]
pub struct InMemoryCatalogRepository {
    table: Arc<CatalogTable>,
}

impl InMemoryCatalogRepository {
    pub fn new(table: CatalogTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Repository over the embedded catalog
    pub fn seeded() -> RepositoryResult<Self> {
        Ok(Self::new(CatalogTable::seed()?))
    }

    pub fn table(&self) -> &CatalogTable {
        &self.table
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.table.categories().to_vec())
    }

    #[instrument(skip(self))]
    async fn find_category(&self, slug: &str) -> RepositoryResult<Option<Category>> {
        let category = self.table.category(slug).cloned();
        debug!(found = category.is_some(), "Category lookup");
        Ok(category)
    }

    #[instrument(skip(self))]
    async fn find_service(
        &self,
        category: &str,
        id: &str,
    ) -> RepositoryResult<Option<ServiceData>> {
        let service = self.table.service(category, id).cloned();
        debug!(found = service.is_some(), "Service lookup");
        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_repository() {
        let repo = InMemoryCatalogRepository::seeded().unwrap();

        let categories = repo.list_categories().await.unwrap();
        assert_eq!(categories.len(), 2);

        let balloons = repo.find_category("balloon-bouquet").await.unwrap().unwrap();
        assert_eq!(balloons.services.len(), 4);
        assert!(repo.find_category("nope").await.unwrap().is_none());

        let beach = repo
            .find_service("candlelight-dinners", "private-beach-dinner")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(beach.price, "₹15,000");
        assert!(repo
            .find_service("candlelight-dinners", "unknown")
            .await
            .unwrap()
            .is_none());
    }
}
