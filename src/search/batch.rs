use tracing::debug;
use crate::core::error::Result;
use crate::index::document_index::DocumentIndex;
use crate::parallel::policy::ExecutionPolicy;
use crate::search::results::ScoredDocument;

/// Runs many independent searches against one index.
///
/// Each query is a plain `find_top_documents` call; with the parallel policy
/// queries are spread over the index's worker pool. Output order always
/// follows input order.
pub struct BatchQueryProcessor<'a> {
    pub index: &'a DocumentIndex,
    pub policy: ExecutionPolicy,
}

impl<'a> BatchQueryProcessor<'a> {
    pub fn new(index: &'a DocumentIndex) -> Self {
        BatchQueryProcessor {
            index,
            policy: ExecutionPolicy::Parallel,
        }
    }

    pub fn with_policy(mut self, policy: ExecutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Element `i` is the result of `queries[i]`. The first malformed query
    /// fails the whole batch.
    pub fn find_all_top<S>(&self, queries: &[S]) -> Result<Vec<Vec<ScoredDocument>>>
    where
        S: AsRef<str> + Sync,
    {
        let index = self.index;
        let results = self.policy.install(index.pool(), || {
            self.policy.map(queries, |query| index.find_top_documents(query.as_ref()))
        });

        debug!(queries = queries.len(), policy = ?self.policy, "batch search finished");
        results.into_iter().collect()
    }

    /// All results flattened, query by query
    pub fn find_all_top_joined<S>(&self, queries: &[S]) -> Result<Vec<ScoredDocument>>
    where
        S: AsRef<str> + Sync,
    {
        Ok(self.find_all_top(queries)?
            .into_iter()
            .flatten()
            .collect())
    }
}
