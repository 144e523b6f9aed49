//! Types for the episode catalog.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Episode number as published by the catalog: either an integer or a
/// free-form string (e.g. "123a").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EpisodeNumber {
    Int(i64),
    Text(String),
}

impl fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodeNumber::Int(n) => write!(f, "{}", n),
            EpisodeNumber::Text(s) => f.write_str(s),
        }
    }
}

/// One episode record as delivered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEpisode {
    /// Episode title, untouched.
    pub title: String,
    pub number: EpisodeNumber,
    /// Publication date. Compared as a plain string, so it must sort
    /// lexicographically (ISO-like).
    pub date: String,
    /// Audio download URL.
    pub download: String,
}

/// All episodes of every show, keyed by show.
///
/// Shows keep the order they appear in the source document; episodes keep
/// the order they were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    shows: Vec<(String, Vec<RawEpisode>)>,
}

impl Catalog {
    /// Build a catalog from `(show_key, episodes)` pairs.
    ///
    /// A repeated show key replaces the earlier episodes but keeps the
    /// position of its first appearance, like a JSON object would.
    pub fn from_shows<I, K>(shows: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<RawEpisode>)>,
        K: Into<String>,
    {
        let mut catalog = Catalog::default();
        for (key, episodes) in shows {
            catalog.insert(key.into(), episodes);
        }
        catalog
    }

    /// Parse a catalog from its JSON document form.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn insert(&mut self, key: String, episodes: Vec<RawEpisode>) {
        match self.shows.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = episodes,
            None => self.shows.push((key, episodes)),
        }
    }

    /// Iterate shows in catalog order.
    pub fn shows(&self) -> impl Iterator<Item = (&str, &[RawEpisode])> {
        self.shows.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Look up the episode a search entry points back to.
    pub fn episode(&self, show_key: &str, index: usize) -> Option<&RawEpisode> {
        self.shows
            .iter()
            .find(|(k, _)| k == show_key)
            .and_then(|(_, episodes)| episodes.get(index))
    }

    pub fn show_count(&self) -> usize {
        self.shows.len()
    }

    /// Total number of episodes across all shows.
    pub fn episode_count(&self) -> usize {
        self.shows.iter().map(|(_, e)| e.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.episode_count() == 0
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.shows.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of show keys to episode lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Catalog, A::Error> {
                let mut catalog = Catalog::default();
                while let Some((key, episodes)) = map.next_entry::<String, Vec<RawEpisode>>()? {
                    catalog.insert(key, episodes);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
