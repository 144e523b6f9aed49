//! Episode catalog - the raw title data every search runs over.
//!
//! The catalog is loaded once, either over HTTP or from a local file, and
//! replaced wholesale if it is ever loaded again.

mod loader;
mod show_map;
mod types;

pub use loader::{create_catalog_loader, CatalogLoader, FileCatalogLoader, HttpCatalogLoader};
pub use show_map::{ShowDisplayMap, DEFAULT_SHOWS};
pub use types::*;

use thiserror::Error;

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// Transport failure (connection refused, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with something other than 200.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog loader not configured: {0}")]
    NotConfigured(String),
}
