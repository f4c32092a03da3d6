// Services module - catalog logic layer

pub mod catalog_service;

pub use catalog_service::CatalogService;
