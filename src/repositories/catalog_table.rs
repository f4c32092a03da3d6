use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::models::{
    Category, RepositoryError, RepositoryResult, ServiceData, Validate, ValidationError,
};

use super::seed;

/// Full detail record for one service, tagged with the category it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub category_slug: String,
    #[serde(flatten)]
    pub service: ServiceData,
}

/// Serialized form of the catalog, as loaded from a JSON data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub details: Vec<DetailRecord>,
}

/// Immutable, validated catalog keyed by category slug and `(category, id)`
#[derive(Debug, Clone)]
pub struct CatalogTable {
    categories: Vec<Category>,
    by_slug: HashMap<String, usize>,
    details: HashMap<(String, String), ServiceData>,
}

impl CatalogTable {
    /// Catalog shipped with the binary
    pub fn seed() -> RepositoryResult<Self> {
        Self::from_document(seed::seed_document())
    }

    pub fn from_json_str(json: &str) -> RepositoryResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    pub fn from_path(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            categories = table.categories.len(),
            "Loaded catalog from data file"
        );
        Ok(table)
    }

    pub fn from_document(document: CatalogDocument) -> RepositoryResult<Self> {
        let mut by_slug = HashMap::new();
        for (index, category) in document.categories.iter().enumerate() {
            category.validate()?;
            if by_slug.insert(category.slug.clone(), index).is_some() {
                return Err(ValidationError::Duplicate {
                    field: "category slug".to_string(),
                    value: category.slug.clone(),
                }
                .into());
            }
        }

        let mut details = HashMap::new();
        for record in document.details {
            if !by_slug.contains_key(&record.category_slug) {
                return Err(RepositoryError::InvalidCatalog {
                    message: format!(
                        "Detail record {} references unknown category {}",
                        record.service.id, record.category_slug
                    ),
                });
            }
            record.service.validate()?;

            let key = (record.category_slug, record.service.id.clone());
            if details.contains_key(&key) {
                return Err(ValidationError::Duplicate {
                    field: format!("detail record in {}", key.0),
                    value: key.1,
                }
                .into());
            }
            details.insert(key, record.service);
        }

        for category in &document.categories {
            for summary in &category.services {
                let key = (category.slug.clone(), summary.id.clone());
                if !details.contains_key(&key) {
                    return Err(ValidationError::MissingDetail {
                        category: key.0,
                        id: key.1,
                    }
                    .into());
                }
            }
        }

        debug!(
            categories = document.categories.len(),
            details = details.len(),
            "Catalog table validated"
        );

        Ok(Self {
            categories: document.categories,
            by_slug,
            details,
        })
    }

    /// Categories in table order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.by_slug
            .get(slug)
            .and_then(|&index| self.categories.get(index))
    }

    pub fn service(&self, category: &str, id: &str) -> Option<&ServiceData> {
        self.details.get(&(category.to_string(), id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
