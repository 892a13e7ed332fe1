use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, warn};
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::tokenizer::{split_words, validate_term};
use crate::core::config::IndexConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, DocumentData, DocumentStatus};
use crate::index::inverted::{InvertedIndex, WordFrequencies};
use crate::parallel::policy::ExecutionPolicy;

static NO_FREQUENCIES: WordFrequencies = BTreeMap::new();

/// In-memory document store with TF-IDF search.
///
/// Owns the term index, per-document metadata, the live id set, the stop
/// words and a worker pool for parallel operations. Reads take `&self` and may
/// run concurrently; adding and removing documents take `&mut self`.
///
/// Search and matching live in [`crate::search::executor`].
pub struct DocumentIndex {
    pub(crate) config: IndexConfig,
    pub(crate) stop_words: StopWordFilter,
    pub(crate) terms: InvertedIndex,
    pub(crate) documents: BTreeMap<DocId, DocumentData>,
    pub(crate) document_ids: BTreeSet<DocId>,
    pub(crate) pool: Arc<ThreadPool>,
}

impl DocumentIndex {
    /// Create an index with space separated stop words, e.g. `"and with"`.
    pub fn new(stop_words: &str) -> Result<Self> {
        Self::with_config(StopWordFilter::from_text(stop_words)?, IndexConfig::default())
    }

    pub fn with_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(StopWordFilter::new(stop_words)?, IndexConfig::default())
    }

    pub fn with_config(stop_words: StopWordFilter, config: IndexConfig) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.worker_threads)
            .thread_name(|i| format!("docsift-worker-{}", i))
            .build()?;

        debug!(
            stop_words = stop_words.len(),
            workers = config.worker_threads,
            partitions = config.partition_count,
            "created document index"
        );

        Ok(DocumentIndex {
            config,
            stop_words,
            terms: InvertedIndex::new(),
            documents: BTreeMap::new(),
            document_ids: BTreeSet::new(),
            pool: Arc::new(pool),
        })
    }

    /// Index a document.
    ///
    /// Fails with `DuplicateOrInvalidId` for negative or already used ids and
    /// with `InvalidTerm` if any word holds a control character. Every check
    /// runs before the index is touched, so a failed call changes nothing.
    pub fn add_document(
        &mut self,
        doc_id: impl Into<DocId>,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        let doc_id = doc_id.into();
        if !doc_id.is_valid() || self.documents.contains_key(&doc_id) {
            return Err(Error::new(
                ErrorKind::DuplicateOrInvalidId,
                format!("document id {} is negative or already indexed", doc_id),
            ));
        }

        let words = self.stop_words.filter(split_words(text));
        for word in &words {
            validate_term(word)?;
        }
        if words.is_empty() {
            warn!(doc_id = %doc_id, "document has no indexable words");
        }

        self.terms.add_document(doc_id, &words);
        let data = DocumentData::new(text, status, ratings);
        debug!(doc_id = %doc_id, words = words.len(), rating = data.rating, ?status, "added document");
        self.documents.insert(doc_id, data);
        self.document_ids.insert(doc_id);

        Ok(())
    }

    pub fn remove_document(&mut self, doc_id: impl Into<DocId>) {
        self.remove_document_with_policy(ExecutionPolicy::Sequential, doc_id);
    }

    /// Purge a document from every structure. Unknown ids are ignored.
    pub fn remove_document_with_policy(&mut self, policy: ExecutionPolicy, doc_id: impl Into<DocId>) {
        let doc_id = doc_id.into();
        if !self.document_ids.remove(&doc_id) {
            return;
        }
        self.documents.remove(&doc_id);

        let terms = &mut self.terms;
        let touched = policy.install(&self.pool, || terms.remove_document(policy, doc_id));
        debug!(doc_id = %doc_id, terms = touched.unwrap_or(0), ?policy, "removed document");
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Live ids in ascending order
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.document_ids.iter().copied()
    }

    pub fn contains_document(&self, doc_id: impl Into<DocId>) -> bool {
        self.document_ids.contains(&doc_id.into())
    }

    pub fn document(&self, doc_id: impl Into<DocId>) -> Option<&DocumentData> {
        self.documents.get(&doc_id.into())
    }

    /// Term frequencies of one document; empty for unknown ids.
    pub fn word_frequencies(&self, doc_id: impl Into<DocId>) -> &WordFrequencies {
        self.terms
            .word_frequencies(doc_id.into())
            .unwrap_or(&NO_FREQUENCIES)
    }

    pub fn stop_words(&self) -> &StopWordFilter {
        &self.stop_words
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn pool(&self) -> &ThreadPool {
        &self.pool
    }

    pub fn term_index(&self) -> &InvertedIndex {
        &self.terms
    }
}

impl<'a> IntoIterator for &'a DocumentIndex {
    type Item = DocId;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, DocId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.document_ids.iter().copied()
    }
}
