//! Result sinks: where rendered search results go.

use serde::{Deserialize, Serialize};

/// One rendered result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub show_abbrev: String,
    pub number: String,
    pub title: String,
    pub date: String,
    pub download_url: String,
}

impl ResultRow {
    /// Episode label as displayed, e.g. "BOL 123".
    pub fn label(&self) -> String {
        format!("{} {}", self.show_abbrev, self.number)
    }
}

/// Consumer of search output.
///
/// A search calls `clear_results`, then `append_result` for each match in
/// display order, then `set_result_count`; nothing else can run in between.
pub trait ResultSink {
    fn set_status(&mut self, message: &str);
    fn clear_results(&mut self);
    fn append_result(&mut self, row: ResultRow);
    fn set_result_count(&mut self, count: usize);
}

/// In-memory result view.
///
/// `count` stays `None` until the first search renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTable {
    pub status: String,
    pub rows: Vec<ResultRow>,
    pub count: Option<usize>,
}

impl ResultSink for ResultTable {
    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
    }

    fn clear_results(&mut self) {
        self.rows.clear();
    }

    fn append_result(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    fn set_result_count(&mut self, count: usize) {
        self.count = Some(count);
    }
}
