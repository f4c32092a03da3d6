// Repositories module - catalog data access layer

pub mod catalog_repository;
pub mod catalog_table;
pub mod seed;

pub use catalog_repository::{CatalogRepository, InMemoryCatalogRepository};
pub use catalog_table::{CatalogDocument, CatalogTable, DetailRecord};
