use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::search::{IndexVariant, MINIMUM_QUERY_LENGTH};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    /// Extra or overriding show abbreviations (show_key -> display code).
    #[serde(default)]
    pub shows: BTreeMap<String, String>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Where the episode catalog comes from.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Http,
    File,
}

/// Catalog loader configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub source: CatalogSource,
    /// Catalog URL (required when source = "http")
    #[serde(default)]
    pub url: Option<String>,
    /// Catalog file (required when source = "file")
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Search behaviour configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_minimum_query_length")]
    pub minimum_query_length: usize,
    #[serde(default)]
    pub index_variant: IndexVariant,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            minimum_query_length: default_minimum_query_length(),
            index_variant: IndexVariant::default(),
        }
    }
}

fn default_minimum_query_length() -> usize {
    MINIMUM_QUERY_LENGTH
}

/// Sanitized config for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub catalog: SanitizedCatalogConfig,
    pub search: SearchConfig,
    pub shows: BTreeMap<String, String>,
}

/// Catalog config without the local filesystem path.
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    pub source: CatalogSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub path_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            catalog: SanitizedCatalogConfig {
                source: config.catalog.source,
                url: config.catalog.url.clone(),
                path_configured: config.catalog.path.is_some(),
                timeout_secs: config.catalog.timeout_secs,
            },
            search: config.search.clone(),
            shows: config.shows.clone(),
        }
    }
}
