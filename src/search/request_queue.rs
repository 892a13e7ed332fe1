use std::collections::VecDeque;
use crate::core::error::Result;
use crate::core::types::{DocId, DocumentStatus};
use crate::index::document_index::DocumentIndex;
use crate::search::results::ScoredDocument;

/// Requests remembered by default: one per minute over a day
pub const DEFAULT_WINDOW: usize = 1440;

#[derive(Debug, Clone)]
struct RequestRecord {
    query: String,
    is_empty: bool,
}

/// Sliding window over the most recent searches, tracking how many of them
/// came back empty.
pub struct RequestQueue<'a> {
    index: &'a DocumentIndex,
    requests: VecDeque<RequestRecord>,
    window: usize,
    empty_requests: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(index: &'a DocumentIndex) -> Self {
        Self::with_window(index, DEFAULT_WINDOW)
    }

    pub fn with_window(index: &'a DocumentIndex, window: usize) -> Self {
        let window = window.max(1);
        RequestQueue {
            index,
            requests: VecDeque::with_capacity(window),
            window,
            empty_requests: 0,
        }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        self.add_find_request_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.add_find_request_with(raw_query, move |_, document_status, _| document_status == status)
    }

    /// Run a search and record it. Failed searches are not recorded.
    pub fn add_find_request_with<F>(&mut self, raw_query: &str, predicate: F) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let result = self.index.find_top_documents_with(raw_query, predicate)?;
        self.record(raw_query, result.is_empty());
        Ok(result)
    }

    fn record(&mut self, raw_query: &str, is_empty: bool) {
        if self.requests.len() == self.window {
            if let Some(oldest) = self.requests.pop_front() {
                if oldest.is_empty {
                    self.empty_requests -= 1;
                }
            }
        }
        self.requests.push_back(RequestRecord {
            query: raw_query.to_string(),
            is_empty,
        });
        if is_empty {
            self.empty_requests += 1;
        }
    }

    /// Empty-result requests among the last `window` requests
    pub fn no_result_requests(&self) -> usize {
        self.empty_requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Recorded queries, oldest first
    pub fn queries(&self) -> impl Iterator<Item = &str> + '_ {
        self.requests.iter().map(|record| record.query.as_str())
    }
}
