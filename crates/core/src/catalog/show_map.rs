//! Short display codes for show keys.

use std::collections::BTreeMap;

/// Built-in show abbreviations.
pub const DEFAULT_SHOWS: &[(&str, &str)] = &[
    ("buzzoutloud", "BOL"),
    ("technewstoday", "TNT"),
    ("dailytechnewsshow", "DTNS"),
    ("gooddayinternet", "GDI"),
];

/// Maps a show key to the abbreviation shown next to episode numbers.
///
/// Keys missing from the map display as the raw show key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDisplayMap {
    abbreviations: BTreeMap<String, String>,
}

impl Default for ShowDisplayMap {
    fn default() -> Self {
        Self {
            abbreviations: DEFAULT_SHOWS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl ShowDisplayMap {
    /// Built-in abbreviations extended (or overridden) by `overrides`.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut map = Self::default();
        for (key, abbrev) in overrides {
            map.abbreviations.insert(key.clone(), abbrev.clone());
        }
        map
    }

    /// Abbreviation for `show_key`, or `None` if the key is not configured.
    pub fn get(&self, show_key: &str) -> Option<&str> {
        self.abbreviations.get(show_key).map(String::as_str)
    }

    /// Abbreviation for `show_key`, falling back to the key itself.
    pub fn abbreviation<'a>(&'a self, show_key: &'a str) -> &'a str {
        self.get(show_key).unwrap_or(show_key)
    }

    pub fn contains(&self, show_key: &str) -> bool {
        self.abbreviations.contains_key(show_key)
    }
}
