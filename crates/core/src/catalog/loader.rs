//! Catalog loaders: fetch the episode catalog over HTTP or from disk.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::{Catalog, CatalogLoadError};
use crate::config::{CatalogConfig, CatalogSource};

/// Source of the episode catalog.
///
/// Loading happens once per session; there is no retry or refresh.
#[async_trait]
pub trait CatalogLoader: Send + Sync {
    /// Loader name for logging.
    fn name(&self) -> &str;

    /// Fetch and parse the full catalog.
    async fn load(&self) -> Result<Catalog, CatalogLoadError>;
}

/// Loads the catalog with a single GET request.
pub struct HttpCatalogLoader {
    client: Client,
    url: String,
}

impl HttpCatalogLoader {
    pub fn new(
        url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, CatalogLoadError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogLoader for HttpCatalogLoader {
    fn name(&self) -> &str {
        "http"
    }

    async fn load(&self) -> Result<Catalog, CatalogLoadError> {
        debug!(url = %self.url, "Fetching catalog");

        let response = self.client.get(&self.url).send().await?;

        // Only a plain 200 counts; other 2xx statuses are failures too.
        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatalogLoadError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let catalog = Catalog::from_json_str(&body)?;
        debug!(
            shows = catalog.show_count(),
            episodes = catalog.episode_count(),
            "Catalog fetched"
        );
        Ok(catalog)
    }
}

/// Loads the catalog from a local JSON file.
pub struct FileCatalogLoader {
    path: PathBuf,
}

impl FileCatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogLoader for FileCatalogLoader {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self) -> Result<Catalog, CatalogLoadError> {
        debug!(path = %self.path.display(), "Reading catalog");
        let body = tokio::fs::read_to_string(&self.path).await?;
        Ok(Catalog::from_json_str(&body)?)
    }
}

/// Factory function to create a catalog loader from config
pub fn create_catalog_loader(
    config: &CatalogConfig,
) -> Result<Box<dyn CatalogLoader>, CatalogLoadError> {
    match config.source {
        CatalogSource::Http => {
            let url = config.url.clone().ok_or_else(|| {
                CatalogLoadError::NotConfigured(
                    "catalog.url must be set for http source".to_string(),
                )
            })?;
            let timeout = config.timeout_secs.map(Duration::from_secs);
            Ok(Box::new(HttpCatalogLoader::new(url, timeout)?))
        }
        CatalogSource::File => {
            let path = config.path.clone().ok_or_else(|| {
                CatalogLoadError::NotConfigured(
                    "catalog.path must be set for file source".to_string(),
                )
            })?;
            Ok(Box::new(FileCatalogLoader::new(path)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer exactly one request with `status_line` and `body`, returning
    /// the URL to fetch.
    async fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}/titles.json", addr)
    }

    #[tokio::test]
    async fn test_file_loader_reads_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"buzzoutloud": [{{"title": "Hello", "number": 1, "date": "2008-01-01", "download": "u1"}}]}}"#
        )
        .unwrap();

        let loader = FileCatalogLoader::new(file.path());
        let catalog = loader.load().await.unwrap();
        assert_eq!(catalog.episode_count(), 1);
        assert_eq!(loader.name(), "file");
    }

    #[tokio::test]
    async fn test_file_loader_missing_file() {
        let loader = FileCatalogLoader::new("/nonexistent/titles.json");
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io(_)));
    }

    #[tokio::test]
    async fn test_file_loader_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let loader = FileCatalogLoader::new(file.path());
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_http_loader_connection_refused() {
        // Port 9 (discard) is essentially never listening on loopback.
        let loader = HttpCatalogLoader::new(
            "http://127.0.0.1:9/titles.json",
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, CatalogLoadError::Http(_)));
    }

    #[tokio::test]
    async fn test_http_loader_parses_ok_body() {
        let url = serve_once(
            "200 OK",
            r#"{"technewstoday": [{"title": "TNT: iPhone 5 rumours", "number": "10", "date": "2012-08-01", "download": "u10"}]}"#,
        )
        .await;

        let loader = HttpCatalogLoader::new(url, Some(Duration::from_secs(5))).unwrap();
        let catalog = loader.load().await.unwrap();

        assert_eq!(catalog.show_count(), 1);
        let episode = catalog.episode("technewstoday", 0).unwrap();
        assert_eq!(episode.title, "TNT: iPhone 5 rumours");
        assert_eq!(episode.number.to_string(), "10");
    }

    #[tokio::test]
    async fn test_http_loader_rejects_no_content() {
        let url = serve_once("204 No Content", "").await;
        let loader = HttpCatalogLoader::new(url, Some(Duration::from_secs(5))).unwrap();

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, CatalogLoadError::Status(204)));
    }

    #[tokio::test]
    async fn test_http_loader_rejects_not_found() {
        let url = serve_once("404 Not Found", "{}").await;
        let loader = HttpCatalogLoader::new(url, Some(Duration::from_secs(5))).unwrap();

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, CatalogLoadError::Status(404)));
    }

    #[tokio::test]
    async fn test_http_loader_malformed_body() {
        let url = serve_once("200 OK", "<html>oops</html>").await;
        let loader = HttpCatalogLoader::new(url, Some(Duration::from_secs(5))).unwrap();

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, CatalogLoadError::Parse(_)));
    }

    #[test]
    fn test_create_loader_from_config() {
        let config = CatalogConfig {
            source: CatalogSource::Http,
            url: Some("http://localhost/titles.json".to_string()),
            path: None,
            timeout_secs: Some(5),
        };
        let loader = create_catalog_loader(&config).unwrap();
        assert_eq!(loader.name(), "http");

        let config = CatalogConfig {
            source: CatalogSource::File,
            url: None,
            path: None,
            timeout_secs: None,
        };
        assert!(matches!(
            create_catalog_loader(&config),
            Err(CatalogLoadError::NotConfigured(_))
        ));
    }
}
