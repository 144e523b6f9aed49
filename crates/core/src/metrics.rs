//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog loading
//! - Searches (outcomes, match counts)

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts};

// =============================================================================
// Catalog Metrics
// =============================================================================

/// Catalog load attempts by result.
pub static CATALOG_LOADS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("titlesearch_catalog_loads_total", "Total catalog loads"),
        &["result"], // "success", "failure"
    )
    .unwrap()
});

/// Entries in the current search index.
pub static INDEX_ENTRIES: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "titlesearch_index_entries",
        "Number of entries in the search index",
    )
    .unwrap()
});

// =============================================================================
// Search Metrics
// =============================================================================

/// Search triggers by outcome.
pub static SEARCHES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("titlesearch_searches_total", "Total search triggers"),
        &["outcome"],
    )
    .unwrap()
});

/// Matches per rendered search, by query type.
pub static SEARCH_MATCHES: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "titlesearch_search_matches",
            "Number of matching episodes per rendered search",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 1000.0]),
        &["query_type"],
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CATALOG_LOADS.clone()),
        Box::new(INDEX_ENTRIES.clone()),
        Box::new(SEARCHES_TOTAL.clone()),
        Box::new(SEARCH_MATCHES.clone()),
    ]
}
