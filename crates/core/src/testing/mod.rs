//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use titlesearch_core::testing::{fixtures, MockCatalogLoader};
//!
//! let loader = MockCatalogLoader::with_catalog(fixtures::sample_catalog());
//! loader.set_delay(Duration::from_millis(200)).await;
//! ```

mod mock_catalog_loader;

pub use mock_catalog_loader::MockCatalogLoader;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{Catalog, EpisodeNumber, RawEpisode};

    /// Create an episode with a download URL derived from its number.
    pub fn episode(title: &str, number: i64, date: &str) -> RawEpisode {
        RawEpisode {
            title: title.to_string(),
            number: EpisodeNumber::Int(number),
            date: date.to_string(),
            download: format!("https://example.com/episodes/{}.mp3", number),
        }
    }

    /// The two-episode "Hello, World!" catalog under an unmapped show key.
    pub fn hello_world_catalog() -> Catalog {
        Catalog::from_shows(vec![(
            "showA",
            vec![
                RawEpisode {
                    title: "Hello, World!".to_string(),
                    number: EpisodeNumber::Int(1),
                    date: "2024-01-01".to_string(),
                    download: "u1".to_string(),
                },
                RawEpisode {
                    title: "HELLO WORLD 2".to_string(),
                    number: EpisodeNumber::Int(2),
                    date: "2024-02-01".to_string(),
                    download: "u2".to_string(),
                },
            ],
        )])
    }

    /// A small multi-show catalog using the built-in show keys.
    pub fn sample_catalog() -> Catalog {
        Catalog::from_shows(vec![
            (
                "buzzoutloud",
                vec![
                    episode("BOL 1: The iPhone Is Here", 1, "2007-06-29"),
                    episode("Buzz Out Loud: Vista, again", 2, "2007-07-02"),
                    episode("Mac vs. PC -- round 12", 3, "2007-07-03"),
                ],
            ),
            (
                "technewstoday",
                vec![
                    episode("TNT: iPhone 5 rumours", 10, "2012-08-01"),
                    episode("Android's Big Day", 11, "2012-08-02"),
                ],
            ),
            (
                "dailytechnewsshow",
                vec![
                    episode("DTNS 2000 \u{2013} iPhone X Review", 2000, "2017-11-03"),
                    episode("Windows 10 S", 2001, "2017-11-06"),
                ],
            ),
        ])
    }
}
