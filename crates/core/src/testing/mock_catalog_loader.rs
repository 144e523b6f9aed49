//! Mock catalog loader for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::catalog::{Catalog, CatalogLoadError, CatalogLoader};

/// Mock implementation of the CatalogLoader trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable catalog
/// - Fail the next load with a given error
/// - Delay loads to observe the unloaded state
/// - Count loads for assertions
///
/// # Example
///
/// ```rust,ignore
/// use titlesearch_core::testing::{MockCatalogLoader, fixtures};
///
/// let loader = MockCatalogLoader::with_catalog(fixtures::sample_catalog());
/// let catalog = loader.load().await?;
/// assert_eq!(loader.load_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCatalogLoader {
    /// Catalog returned by successful loads.
    catalog: Arc<RwLock<Option<Catalog>>>,
    /// If set, the next load fails with this error.
    next_error: Arc<RwLock<Option<CatalogLoadError>>>,
    /// Artificial latency before each load completes.
    delay: Arc<RwLock<Option<Duration>>>,
    loads: Arc<AtomicUsize>,
}

impl MockCatalogLoader {
    /// Create a loader with no catalog; loads fail until one is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader that returns `catalog`.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Some(catalog))),
            ..Self::default()
        }
    }

    /// Create a loader whose first load fails with `error`.
    pub fn failing(error: CatalogLoadError) -> Self {
        Self {
            next_error: Arc::new(RwLock::new(Some(error))),
            ..Self::default()
        }
    }

    pub async fn set_catalog(&self, catalog: Catalog) {
        *self.catalog.write().await = Some(catalog);
    }

    /// Configure the next load to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogLoadError) {
        *self.next_error.write().await = Some(error);
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// Number of loads attempted so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogLoader for MockCatalogLoader {
    fn name(&self) -> &str {
        "mock"
    }

    async fn load(&self) -> Result<Catalog, CatalogLoadError> {
        self.loads.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.catalog
            .read()
            .await
            .clone()
            .ok_or_else(|| CatalogLoadError::NotConfigured("mock catalog not set".to_string()))
    }
}
