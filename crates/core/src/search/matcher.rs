//! Per-mode comparison of a compiled query against one entry.

use super::index::SearchEntry;
use super::query::CompiledQuery;

/// Whether `entry` satisfies `query`.
///
/// An exact query never matches an entry built without its original title.
pub fn matches(query: &CompiledQuery, entry: &SearchEntry) -> bool {
    match query {
        CompiledQuery::ExactString(s) => entry
            .exact
            .as_deref()
            .is_some_and(|exact| exact.contains(s.as_str())),
        CompiledQuery::LooseString(s) => entry.loose.contains(s.as_str()),
        CompiledQuery::WildcardPattern(re) => re.is_match(&entry.loose),
        CompiledQuery::WildcardTokenSet(tokens) => {
            tokens.iter().all(|token| entry.loose.contains(token.as_str()))
        }
    }
}
