use tracing::trace;
use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;
use crate::parallel::accumulator::ConcurrentAccumulator;
use crate::parallel::policy::ExecutionPolicy;

/// Scorer trait
pub trait Scorer: Send + Sync {
    /// Weight of a term given how many of `total_docs` documents contain it
    fn idf(&self, total_docs: usize, doc_freq: usize) -> f64;

    /// Contribution of one term to one document's relevance
    fn score(&self, term_freq: f64, idf: f64) -> f64;

    fn name(&self) -> &str;
}

/// TF-IDF Scorer. Term frequencies are already normalized by document length
/// at indexing time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl Scorer for TfIdfScorer {
    fn idf(&self, total_docs: usize, doc_freq: usize) -> f64 {
        (total_docs as f64 / doc_freq as f64).ln()
    }

    fn score(&self, term_freq: f64, idf: f64) -> f64 {
        term_freq * idf
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}

/// Add every plus-term's contribution into `relevance`.
///
/// Terms are spread across workers under `policy`; two terms may hit the same
/// document, which the accumulator's per-partition locks serialize.
pub fn accumulate_relevance<S: Scorer>(
    policy: ExecutionPolicy,
    scorer: &S,
    index: &InvertedIndex,
    total_docs: usize,
    plus_terms: &[&str],
    relevance: &ConcurrentAccumulator<DocId, f64>,
) {
    policy.for_each(plus_terms, |term| {
        let Some(postings) = index.postings(term) else {
            return;
        };
        let idf = scorer.idf(total_docs, postings.len());
        trace!(term = %term, doc_freq = postings.len(), idf, "scoring term");
        for (&doc_id, &term_freq) in postings {
            *relevance.access(doc_id) += scorer.score(term_freq, idf);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idf_is_natural_log_ratio() {
        let scorer = TfIdfScorer;
        assert!((scorer.idf(5, 1) - 5f64.ln()).abs() < 1e-12);
        assert_eq!(scorer.idf(3, 3), 0.0);
        assert_eq!(scorer.score(0.5, 2.0), 1.0);
        assert_eq!(scorer.name(), "tfidf");
    }

    #[test]
    fn shared_documents_sum_contributions() {
        let mut index = InvertedIndex::new();
        index.add_document(DocId(1), &["white", "cat"]);
        index.add_document(DocId(2), &["black", "dog"]);
        index.add_document(DocId(3), &["white", "dog"]);

        for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
            let relevance = ConcurrentAccumulator::new(4);
            accumulate_relevance(policy, &TfIdfScorer, &index, 3, &["white", "cat", "bird"], &relevance);
            let scores = relevance.drain();

            let idf_white = (3.0f64 / 2.0).ln();
            let idf_cat = 3f64.ln();
            assert_eq!(scores.len(), 2);
            assert!((scores[&DocId(1)] - (0.5 * idf_white + 0.5 * idf_cat)).abs() < 1e-12);
            assert!((scores[&DocId(3)] - 0.5 * idf_white).abs() < 1e-12);
        }
    }
}
