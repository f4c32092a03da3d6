use thiserror::Error;

/// Service-level errors that can occur in catalog logic
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Category not found: {slug}")]
    CategoryNotFound { slug: String },

    #[error("Service not found: category={category}, id={id}")]
    ServiceNotFound { category: String, id: String },

    #[error("Catalog temporarily unavailable: {message}")]
    TransientFailure { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Repository error: {source}")]
    Repository {
        #[from]
        source: RepositoryError,
    },
}

/// Repository-level errors for catalog data access
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Item not found")]
    NotFound,

    #[error("Catalog source unavailable: {message}")]
    Unavailable { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Validation errors for catalog data
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}={value}, expected={expected}")]
    InvalidFormat {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Field too long: {field}, max_length={max_length}, actual_length={actual_length}")]
    TooLong {
        field: String,
        max_length: usize,
        actual_length: usize,
    },

    #[error("Duplicate {field}: {value}")]
    Duplicate { field: String, value: String },

    #[error("Service {id} has no images")]
    EmptyImages { id: String },

    #[error("No detail record for {category}/{id}")]
    MissingDetail { category: String, id: String },
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::ValidationError {
            message: err.to_string(),
        }
    }
}

impl From<ValidationError> for RepositoryError {
    fn from(err: ValidationError) -> Self {
        RepositoryError::InvalidCatalog {
            message: err.to_string(),
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
