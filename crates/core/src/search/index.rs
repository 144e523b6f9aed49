//! Searchable projection of the catalog.

use serde::{Deserialize, Serialize};

use super::normalize::normalize;
use super::query::QueryType;
use crate::catalog::Catalog;

/// Which fields the index keeps per episode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexVariant {
    /// Exact and loose titles; every query type is available.
    #[default]
    Full,
    /// Loose titles only; exact-title query types are unavailable.
    Minimal,
}

impl IndexVariant {
    /// Query types this variant can answer.
    pub fn supported_query_types(self) -> &'static [QueryType] {
        match self {
            IndexVariant::Full => &[
                QueryType::Exact,
                QueryType::Loose,
                QueryType::Wildcard,
                QueryType::WildcardAny,
            ],
            IndexVariant::Minimal => &[QueryType::Loose, QueryType::Wildcard],
        }
    }

    pub fn supports(self, query_type: QueryType) -> bool {
        self.supported_query_types().contains(&query_type)
    }
}

/// One searchable episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    /// Original title; absent in the minimal variant.
    pub exact: Option<String>,
    /// Normalized, upper-cased title.
    pub loose: String,
    pub show_key: String,
    /// Position within the show's episode list.
    pub index_in_show: usize,
}

/// Build one entry per episode, shows in catalog order, episodes in stored order.
pub fn build_index(catalog: &Catalog, variant: IndexVariant) -> Vec<SearchEntry> {
    let mut entries = Vec::with_capacity(catalog.episode_count());

    for (show_key, episodes) in catalog.shows() {
        for (index_in_show, episode) in episodes.iter().enumerate() {
            let exact = match variant {
                IndexVariant::Full => Some(episode.title.clone()),
                IndexVariant::Minimal => None,
            };
            entries.push(SearchEntry {
                exact,
                loose: normalize(&episode.title),
                show_key: show_key.to_string(),
                index_in_show,
            });
        }
    }

    entries
}
