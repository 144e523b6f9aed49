use titlesearch_core::{
    CatalogLoader, Config, ResultTable, SanitizedConfig, SearchSession, SessionOptions,
};
use tokio::sync::RwLock;
use tracing::info;

/// Shared application state
pub struct AppState {
    config: Config,
    session: RwLock<SearchSession<ResultTable>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session = SearchSession::new(SessionOptions::from(&config), ResultTable::default());
        Self {
            config,
            session: RwLock::new(session),
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    /// The search session. Searches take the write lock so that clearing
    /// and refilling the result view happens as one step.
    pub fn session(&self) -> &RwLock<SearchSession<ResultTable>> {
        &self.session
    }

    /// Fetch the catalog and install it (or the failure) in the session.
    ///
    /// The session lock is not held while the loader runs.
    pub async fn load_catalog(&self, loader: &dyn CatalogLoader) {
        info!(loader = loader.name(), "Loading catalog");
        let result = loader.load().await;

        let mut session = self.session.write().await;
        match result {
            Ok(catalog) => session.on_catalog_loaded(catalog),
            Err(e) => session.on_catalog_failed(&e),
        }
    }
}
