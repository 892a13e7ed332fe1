use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Deserialize};
use crate::core::config::IndexConfig;
use crate::core::types::DocId;
use crate::parallel::policy::ExecutionPolicy;

/// Document with relevance score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl ScoredDocument {
    pub fn new(id: DocId, relevance: f64, rating: i32) -> Self {
        ScoredDocument { id, relevance, rating }
    }
}

impl fmt::Display for ScoredDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Orders hits by relevance, then rating, and keeps the top K.
///
/// Relevances closer than `epsilon` count as equal. Because "within epsilon"
/// is not transitive, hits are first put in a strict order and then each run
/// of near-equal relevances is re-sorted by rating.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    pub max_results: usize,
    pub epsilon: f64,
}

impl Ranker {
    pub fn new(max_results: usize, epsilon: f64) -> Self {
        Ranker { max_results, epsilon }
    }

    pub fn from_config(config: &IndexConfig) -> Self {
        Ranker::new(config.max_results, config.relevance_epsilon)
    }

    pub fn rank(&self, policy: ExecutionPolicy, mut hits: Vec<ScoredDocument>) -> Vec<ScoredDocument> {
        policy.sort_by(&mut hits, |a, b| {
            b.relevance.total_cmp(&a.relevance)
                .then_with(|| b.rating.cmp(&a.rating))
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut start = 0;
        while start < hits.len() {
            let head = hits[start].relevance;
            let mut end = start + 1;
            while end < hits.len() && (head - hits[end].relevance).abs() < self.epsilon {
                end += 1;
            }
            if end - start > 1 {
                hits[start..end].sort_by(by_rating_then_id);
            }
            if end >= self.max_results {
                break;
            }
            start = end;
        }

        hits.truncate(self.max_results);
        hits
    }
}

fn by_rating_then_id(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.rating.cmp(&a.rating).then_with(|| a.id.cmp(&b.id))
}
