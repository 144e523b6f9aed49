//! Search session: owns the catalog, its index and the result sink, and
//! runs one search per user trigger.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::index::{build_index, IndexVariant, SearchEntry};
use super::matcher::matches;
use super::query::{compile, QueryError, QueryType};
use super::sink::{ResultRow, ResultSink};
use crate::catalog::{Catalog, CatalogLoadError, RawEpisode, ShowDisplayMap};
use crate::config::Config;
use crate::metrics::{CATALOG_LOADS, INDEX_ENTRIES, SEARCHES_TOTAL, SEARCH_MATCHES};

/// Shortest query that triggers a search.
pub const MINIMUM_QUERY_LENGTH: usize = 2;

/// Status shown while the catalog is being fetched.
pub const LOADING_STATUS: &str = "Loading titles...";

/// Status shown when the catalog could not be loaded.
pub const LOAD_FAILED_STATUS: &str = "Failed to load titles.";

/// Catalog readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogState {
    Unloaded,
    Loaded,
    LoadFailed,
}

/// What a search trigger did.
///
/// Only `Rendered` touches the result sink; every other outcome leaves the
/// previous results in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    Rendered { count: usize },
    TooShort,
    NoQueryType,
    UnknownQueryType { query_type: String },
    UnsupportedQueryType { query_type: QueryType },
    NotLoaded,
    InvalidPattern { message: String },
}

impl SearchOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SearchOutcome::Rendered { .. })
    }

    /// Metric label.
    pub fn label(&self) -> &'static str {
        match self {
            SearchOutcome::Rendered { .. } => "rendered",
            SearchOutcome::TooShort => "too_short",
            SearchOutcome::NoQueryType => "no_query_type",
            SearchOutcome::UnknownQueryType { .. } => "unknown_query_type",
            SearchOutcome::UnsupportedQueryType { .. } => "unsupported_query_type",
            SearchOutcome::NotLoaded => "not_loaded",
            SearchOutcome::InvalidPattern { .. } => "invalid_pattern",
        }
    }
}

/// Tunables for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub minimum_query_length: usize,
    pub index_variant: IndexVariant,
    pub shows: ShowDisplayMap,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            minimum_query_length: MINIMUM_QUERY_LENGTH,
            index_variant: IndexVariant::default(),
            shows: ShowDisplayMap::default(),
        }
    }
}

impl From<&Config> for SessionOptions {
    fn from(config: &Config) -> Self {
        Self {
            minimum_query_length: config.search.minimum_query_length,
            index_variant: config.search.index_variant,
            shows: ShowDisplayMap::with_overrides(&config.shows),
        }
    }
}

/// A catalog together with the index derived from it.
#[derive(Debug)]
struct Loaded {
    catalog: Catalog,
    index: Vec<SearchEntry>,
}

/// Search orchestrator.
pub struct SearchSession<S: ResultSink> {
    options: SessionOptions,
    state: CatalogState,
    loaded: Option<Loaded>,
    sink: S,
}

impl<S: ResultSink> SearchSession<S> {
    /// Create an unloaded session; the sink shows the loading status.
    pub fn new(options: SessionOptions, mut sink: S) -> Self {
        sink.set_status(LOADING_STATUS);
        Self {
            options,
            state: CatalogState::Unloaded,
            loaded: None,
            sink,
        }
    }

    pub fn state(&self) -> CatalogState {
        self.state
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.loaded.as_ref().map(|l| &l.catalog)
    }

    pub fn index(&self) -> Option<&[SearchEntry]> {
        self.loaded.as_ref().map(|l| l.index.as_slice())
    }

    /// Query types the active index variant can answer.
    pub fn available_query_types(&self) -> &'static [QueryType] {
        self.options.index_variant.supported_query_types()
    }

    /// Install a freshly loaded catalog, replacing any previous one.
    pub fn on_catalog_loaded(&mut self, catalog: Catalog) {
        let index = build_index(&catalog, self.options.index_variant);
        info!(
            shows = catalog.show_count(),
            entries = index.len(),
            variant = ?self.options.index_variant,
            "Catalog loaded"
        );

        if catalog.is_empty() {
            warn!("Catalog has no episodes, every search will render nothing");
        }

        for (show_key, _) in catalog.shows() {
            if !self.options.shows.contains(show_key) {
                warn!(show_key, "Show has no abbreviation, displaying its key");
            }
        }

        CATALOG_LOADS.with_label_values(&["success"]).inc();
        INDEX_ENTRIES.set(index.len() as i64);

        self.loaded = Some(Loaded { catalog, index });
        self.state = CatalogState::Loaded;
        self.sink.set_status("");
    }

    /// Record a failed load. Later searches are no-ops.
    pub fn on_catalog_failed(&mut self, error: &CatalogLoadError) {
        warn!(error = %error, "Failed to load catalog");

        CATALOG_LOADS.with_label_values(&["failure"]).inc();
        INDEX_ENTRIES.set(0);

        self.loaded = None;
        self.state = CatalogState::LoadFailed;
        self.sink.set_status(LOAD_FAILED_STATUS);
    }

    /// Run one search trigger with the current query text and selected type.
    pub fn search(&mut self, query: &str, query_type: Option<&str>) -> SearchOutcome {
        let outcome = self.run_search(query, query_type);
        SEARCHES_TOTAL.with_label_values(&[outcome.label()]).inc();
        outcome
    }

    fn run_search(&mut self, query: &str, query_type: Option<&str>) -> SearchOutcome {
        if query.chars().count() < self.options.minimum_query_length {
            return SearchOutcome::TooShort;
        }

        let Some(query_type) = query_type else {
            warn!("No query type selected");
            return SearchOutcome::NoQueryType;
        };

        let query_type = match query_type.parse::<QueryType>() {
            Ok(t) => t,
            Err(e) => {
                warn!(error = %e, "Ignoring search");
                return SearchOutcome::UnknownQueryType {
                    query_type: query_type.to_string(),
                };
            }
        };

        if !self.options.index_variant.supports(query_type) {
            warn!(
                %query_type,
                variant = ?self.options.index_variant,
                "Query type not available for this index"
            );
            return SearchOutcome::UnsupportedQueryType { query_type };
        }

        let Some(loaded) = self.loaded.as_ref() else {
            debug!("Catalog not loaded, nothing to search");
            return SearchOutcome::NotLoaded;
        };

        let compiled = match compile(query_type, query) {
            Ok(c) => c,
            Err(QueryError::InvalidPattern(message)) => {
                debug!(%message, "Invalid wildcard pattern");
                return SearchOutcome::InvalidPattern { message };
            }
            Err(QueryError::UnknownType(t)) => {
                return SearchOutcome::UnknownQueryType { query_type: t };
            }
        };

        let mut found: Vec<(&str, &RawEpisode)> = loaded
            .index
            .iter()
            .filter(|entry| matches(&compiled, entry))
            .filter_map(|entry| {
                loaded
                    .catalog
                    .episode(&entry.show_key, entry.index_in_show)
                    .map(|episode| (entry.show_key.as_str(), episode))
            })
            .collect();

        // Newest first; the sort is stable so equal dates keep index order.
        found.sort_by(|a, b| b.1.date.cmp(&a.1.date));

        let count = found.len();
        debug!(%query_type, query, count, "Search complete");
        SEARCH_MATCHES
            .with_label_values(&[query_type.as_str()])
            .observe(count as f64);

        self.sink.clear_results();
        for (show_key, episode) in found {
            self.sink.append_result(ResultRow {
                show_abbrev: self.options.shows.abbreviation(show_key).to_string(),
                number: episode.number.to_string(),
                title: episode.title.clone(),
                date: episode.date.clone(),
                download_url: episode.download.clone(),
            });
        }
        self.sink.set_result_count(count);

        SearchOutcome::Rendered { count }
    }
}
