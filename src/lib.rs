//! oolahop - CRUD web service for gelataria records
//!
//! A thin HTTP layer over a single MongoDB collection. Requests are
//! validated against the record model, external string identifiers are
//! decoded to document identifiers, and each endpoint issues exactly one
//! single-document store operation.
//!
//! The store is an explicit dependency: it is connected once at startup and
//! injected into the router as shared state, so handlers never touch
//! ambient globals.

pub mod http_server;
pub mod model;
pub mod store;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::{MongoGelatariaStore, StoreConfig};

/// Errors that can abort process startup.
#[derive(Debug, Error)]
pub enum BootError {
    /// Store configuration could not be read from the environment
    #[error(transparent)]
    StoreConfig(#[from] store::ConfigError),

    /// HTTP configuration could not be read from the environment
    #[error(transparent)]
    HttpConfig(#[from] http_server::InvalidPort),

    /// The document store could not be reached
    #[error("failed to connect to the document store: {0}")]
    Store(#[from] store::StoreError),

    /// The HTTP server failed to bind or serve
    #[error("http server failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads configuration, connects the store, and serves the API until the
/// process is terminated.
pub async fn run() -> Result<(), BootError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store_config = StoreConfig::from_env()?;
    let http_config = HttpServerConfig::from_env()?;

    let store = MongoGelatariaStore::connect(&store_config).await?;
    tracing::info!(database = %store_config.database, "connected to document store");

    let server = HttpServer::with_config(http_config, Arc::new(store));
    server.start().await?;

    Ok(())
}
