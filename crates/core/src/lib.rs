pub mod catalog;
pub mod config;
pub mod metrics;
pub mod search;
pub mod testing;

pub use catalog::{
    create_catalog_loader, Catalog, CatalogLoadError, CatalogLoader, EpisodeNumber,
    FileCatalogLoader, HttpCatalogLoader, RawEpisode, ShowDisplayMap,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, CatalogSource, Config,
    ConfigError, SanitizedConfig, SearchConfig, ServerConfig,
};
pub use search::{
    build_index, compile, matches, normalize, CatalogState, CompiledQuery, IndexVariant,
    QueryError, QueryType, ResultRow, ResultSink, ResultTable, SearchEntry, SearchOutcome,
    SearchSession, SessionOptions,
};
