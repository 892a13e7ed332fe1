use tracing::debug;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, DocumentStatus};
use crate::index::document_index::DocumentIndex;
use crate::parallel::accumulator::ConcurrentAccumulator;
use crate::parallel::policy::ExecutionPolicy;
use crate::query::parser::QueryParser;
use crate::query::types::Query;
use crate::scoring::scorer::{accumulate_relevance, TfIdfScorer};
use crate::search::results::{Ranker, ScoredDocument};

/// Plus-terms found in a document (ascending, borrowed from the index) and the
/// document's status
pub type MatchedTerms<'a> = (Vec<&'a str>, DocumentStatus);

impl DocumentIndex {
    /// Top documents with status `Actual`
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with(raw_query, move |_, document_status, _| document_status == status)
    }

    pub fn find_top_documents_with<F>(&self, raw_query: &str, predicate: F) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        self.find_top_documents_with_policy(ExecutionPolicy::Sequential, raw_query, predicate)
    }

    /// Search for the best matches of `raw_query` among documents accepted by
    /// `predicate(id, status, rating)`.
    ///
    /// Documents holding any minus-term are dropped. Results are ordered by
    /// relevance, near-equal relevances by rating, and cut at
    /// `config.max_results`.
    pub fn find_top_documents_with_policy<F>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = QueryParser::new(&self.stop_words).parse(raw_query)?;
        let ranker = Ranker::from_config(&self.config);

        let top = policy.install(&self.pool, || {
            let matched = self.find_all_documents(policy, &query, &predicate);
            ranker.rank(policy, matched)
        });

        debug!(query = raw_query, hits = top.len(), ?policy, "search finished");
        Ok(top)
    }

    fn find_all_documents<F>(&self, policy: ExecutionPolicy, query: &Query<'_>, predicate: &F) -> Vec<ScoredDocument>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let partitions = if policy.is_parallel() { self.config.partition_count } else { 1 };
        let relevance: ConcurrentAccumulator<DocId, f64> = ConcurrentAccumulator::new(partitions);

        let plus_terms: Vec<&str> = query.plus_terms.iter().copied().collect();
        accumulate_relevance(
            policy,
            &TfIdfScorer,
            &self.terms,
            self.documents.len(),
            &plus_terms,
            &relevance,
        );

        let minus_terms: Vec<&str> = query.minus_terms.iter().copied().collect();
        let candidates = relevance.keys();
        policy.for_each(&candidates, |&doc_id| {
            let keep = self.documents.get(&doc_id).is_some_and(|data| {
                predicate(doc_id, data.status, data.rating)
                    && !minus_terms.iter().any(|term| self.terms.contains(doc_id, term))
            });
            if !keep {
                relevance.erase(&doc_id);
            }
        });

        relevance.drain()
            .into_iter()
            .filter_map(|(doc_id, score)| {
                self.documents
                    .get(&doc_id)
                    .map(|data| ScoredDocument::new(doc_id, score, data.rating))
            })
            .collect()
    }

    pub fn match_document(&self, raw_query: &str, doc_id: impl Into<DocId>) -> Result<MatchedTerms<'_>> {
        self.match_document_with_policy(ExecutionPolicy::Sequential, raw_query, doc_id)
    }

    /// Plus-terms of `raw_query` present in the document. A document holding
    /// any minus-term matches nothing.
    pub fn match_document_with_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        doc_id: impl Into<DocId>,
    ) -> Result<MatchedTerms<'_>> {
        let doc_id = doc_id.into();
        let status = match self.documents.get(&doc_id) {
            Some(data) => data.status,
            None => {
                return Err(Error::new(
                    ErrorKind::UnknownDocumentId,
                    format!("document {} is not indexed", doc_id),
                ));
            }
        };

        let query = QueryParser::new(&self.stop_words).parse(raw_query)?;
        let plus_terms: Vec<&str> = query.plus_terms.iter().copied().collect();
        let minus_terms: Vec<&str> = query.minus_terms.iter().copied().collect();

        let matched = policy.install(&self.pool, || {
            if policy.any(&minus_terms, |term| self.terms.contains(doc_id, term)) {
                return Vec::new();
            }
            // plus_terms is ascending and map keeps order
            policy.map(&plus_terms, |term| self.terms.stored_term(doc_id, term))
                .into_iter()
                .flatten()
                .collect()
        });

        Ok((matched, status))
    }
}
