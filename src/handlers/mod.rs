pub mod api;
pub mod health;
pub mod metrics;
pub mod middleware;
pub mod pages;

pub use health::health_check;
pub use metrics::metrics_handler;
pub use middleware::{request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER};
