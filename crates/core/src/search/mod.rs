//! Title search engine.
//!
//! Episode titles are normalized into a searchable index once per catalog
//! load. Each search compiles the user's query for the selected query type,
//! filters the index and renders the matches newest first into a
//! [`ResultSink`].

mod index;
mod matcher;
mod normalize;
mod query;
mod session;
mod sink;

pub use index::{build_index, IndexVariant, SearchEntry};
pub use matcher::matches;
pub use normalize::normalize;
pub use query::{compile, CompiledQuery, QueryError, QueryType};
pub use session::{
    CatalogState, SearchOutcome, SearchSession, SessionOptions, LOADING_STATUS,
    LOAD_FAILED_STATUS, MINIMUM_QUERY_LENGTH,
};
pub use sink::{ResultRow, ResultSink, ResultTable};
