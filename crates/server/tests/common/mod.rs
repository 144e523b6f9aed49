//! Common test utilities for in-process API testing.
//!
//! This module provides a test fixture that creates an in-process server
//! with a mock catalog loader, so no network or files are needed.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use titlesearch_core::{
    testing::MockCatalogLoader, Catalog, CatalogConfig, CatalogLoadError, CatalogSource, Config,
    IndexVariant, SearchConfig, ServerConfig,
};
use titlesearch_server::state::AppState;

/// Re-export fixtures for test convenience
pub use titlesearch_core::testing::fixtures;

/// Test fixture for API testing with a mock catalog loader.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new().await;
///
///     let response = fixture.post("/api/v1/search", json!({
///         "query": "iphone",
///         "query_type": "loose"
///     })).await;
///
///     assert_eq!(response.body["count"], 3);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Shared state, for driving catalog loads directly
    pub state: Arc<AppState>,
    /// Mock loader used for the catalog load
    pub loader: MockCatalogLoader,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture with the sample catalog already loaded.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    /// Create a test fixture with custom configuration.
    pub async fn with_config(test_config: TestConfig) -> Self {
        let config = Config {
            catalog: CatalogConfig {
                source: CatalogSource::Http,
                url: Some("http://127.0.0.1/titles.json".to_string()),
                path: None,
                timeout_secs: None,
            },
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            search: SearchConfig {
                index_variant: test_config.index_variant,
                ..SearchConfig::default()
            },
            shows: test_config.shows,
        };

        let pending = matches!(test_config.load, CatalogLoad::Pending);
        let loader = match test_config.load {
            CatalogLoad::Catalog(catalog) => MockCatalogLoader::with_catalog(catalog),
            CatalogLoad::Fail(status) => {
                MockCatalogLoader::failing(CatalogLoadError::Status(status))
            }
            CatalogLoad::Pending => MockCatalogLoader::new(),
        };

        let state = Arc::new(AppState::new(config));
        if !pending {
            state.load_catalog(&loader).await;
        }

        let router = titlesearch_server::api::create_router(Arc::clone(&state));

        Self {
            router,
            state,
            loader,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Run a search trigger.
    pub async fn search(&self, query: &str, query_type: Option<&str>) -> TestResponse {
        let mut body = serde_json::json!({ "query": query });
        if let Some(query_type) = query_type {
            body["query_type"] = Value::from(query_type);
        }
        self.post("/api/v1/search", body).await
    }

    /// Send a GET request and return the raw body text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::get(path).body(Body::empty()).unwrap();
        let (status, bytes) = self.exchange(request).await;
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let (status, bytes) = self.exchange(request).await;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse { status, body }
    }

    async fn exchange(&self, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        (status, bytes)
    }
}

/// How the fixture's catalog load goes.
#[derive(Debug, Clone)]
pub enum CatalogLoad {
    /// Load succeeds with this catalog.
    Catalog(Catalog),
    /// Load fails with this HTTP status.
    Fail(u16),
    /// No load is attempted.
    Pending,
}

/// Configuration for test fixture.
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub load: CatalogLoad,
    pub index_variant: IndexVariant,
    pub shows: BTreeMap<String, String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            load: CatalogLoad::Catalog(fixtures::sample_catalog()),
            index_variant: IndexVariant::Full,
            shows: BTreeMap::new(),
        }
    }
}

impl TestConfig {
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            load: CatalogLoad::Catalog(catalog),
            ..Self::default()
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            load: CatalogLoad::Fail(status),
            ..Self::default()
        }
    }

    pub fn pending() -> Self {
        Self {
            load: CatalogLoad::Pending,
            ..Self::default()
        }
    }
}

/// Helper to assert response status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}

/// Helper to assert a JSON path equals expected value.
#[macro_export]
macro_rules! assert_json_path {
    ($json:expr, $path:expr, $expected:expr) => {
        let actual = &$json[$path];
        assert_eq!(
            actual, &$expected,
            "Path '{}' expected {:?}, got {:?}",
            $path, $expected, actual
        );
    };
}
