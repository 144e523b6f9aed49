use super::{
    types::{CatalogSource, Config},
    ConfigError,
};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Minimum query length is at least 1
/// - The selected catalog source has its location configured
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.search.minimum_query_length == 0 {
        return Err(ConfigError::ValidationError(
            "search.minimum_query_length must be at least 1".to_string(),
        ));
    }

    match config.catalog.source {
        CatalogSource::Http => {
            let url = config.catalog.url.as_deref().unwrap_or_default();
            if url.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "catalog.url is required when catalog.source = \"http\"".to_string(),
                ));
            }
        }
        CatalogSource::File => {
            if config.catalog.path.is_none() {
                return Err(ConfigError::ValidationError(
                    "catalog.path is required when catalog.source = \"file\"".to_string(),
                ));
            }
        }
    }

    for (show_key, abbrev) in &config.shows {
        if abbrev.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "shows.{} has an empty abbreviation",
                show_key
            )));
        }
    }

    Ok(())
}
