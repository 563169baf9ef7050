//! # HTTP Server
//!
//! Axum-based HTTP surface for the gelataria collection: the CRUD routes,
//! a health check, error-to-status mapping, and server assembly.

pub mod config;
pub mod errors;
pub mod gelataria_routes;
pub mod observability_routes;
pub mod server;

pub use config::{HttpServerConfig, InvalidPort};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use gelataria_routes::gelataria_routes;
pub use observability_routes::health_routes;
pub use server::HttpServer;
