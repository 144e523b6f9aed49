//! Query types and query compilation.

use std::fmt;
use std::str::FromStr;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a query is compared against titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryType {
    /// Case-sensitive substring of the original title.
    Exact,
    /// Substring of the normalized title.
    Loose,
    /// Query words in order, anything in between.
    Wildcard,
    /// All query words, any order.
    WildcardAny,
}

impl QueryType {
    pub const ALL: [QueryType; 4] = [
        QueryType::Exact,
        QueryType::Loose,
        QueryType::Wildcard,
        QueryType::WildcardAny,
    ];

    /// Identifier used by the query input surface.
    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::Exact => "exact",
            QueryType::Loose => "loose",
            QueryType::Wildcard => "wildcard",
            QueryType::WildcardAny => "wildcard-any",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| QueryError::UnknownType(s.to_string()))
    }
}

/// Errors raised while turning user input into a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Unknown query type: {0}")]
    UnknownType(String),

    #[error("Invalid wildcard pattern: {0}")]
    InvalidPattern(String),
}

/// A query ready to be evaluated against search entries.
#[derive(Debug, Clone)]
pub enum CompiledQuery {
    ExactString(String),
    LooseString(String),
    WildcardPattern(Regex),
    WildcardTokenSet(Vec<String>),
}

/// Non-greedy "anything" placed between wildcard words.
const WILDCARD_GLOB: &str = ".*?";

/// Compile raw user text for the given query type.
///
/// Length limits are the caller's concern. Wildcard words are used as
/// pattern fragments as typed, so malformed input is reported as
/// [`QueryError::InvalidPattern`].
pub fn compile(query_type: QueryType, raw_query: &str) -> Result<CompiledQuery, QueryError> {
    match query_type {
        QueryType::Exact => Ok(CompiledQuery::ExactString(raw_query.to_string())),
        QueryType::Loose => Ok(CompiledQuery::LooseString(raw_query.to_uppercase())),
        QueryType::Wildcard => {
            let upper = raw_query.to_uppercase();
            let pattern = upper.split_whitespace().collect::<Vec<_>>().join(WILDCARD_GLOB);
            Regex::new(&pattern)
                .map(CompiledQuery::WildcardPattern)
                .map_err(|e| QueryError::InvalidPattern(e.to_string()))
        }
        QueryType::WildcardAny => Ok(CompiledQuery::WildcardTokenSet(
            raw_query
                .to_uppercase()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        )),
    }
}
