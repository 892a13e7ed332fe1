use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::trace;
use crate::core::types::{DocId, Term};
use crate::parallel::policy::ExecutionPolicy;

/// Document → normalized term frequency, for one term
pub type Postings = BTreeMap<DocId, f64>;

/// Term → normalized term frequency, for one document
pub type WordFrequencies = BTreeMap<Term, f64>;

/// Inverted and forward term index.
///
/// `postings` maps term → doc → tf and `doc_terms` maps doc → term → tf; both
/// always hold the same (doc, term, tf) triples and share the same `Term`
/// allocations. A term is present in `postings` only while some document
/// still contains it.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    pub postings: BTreeMap<Term, Postings>,
    pub doc_terms: BTreeMap<DocId, WordFrequencies>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: BTreeMap::new(),
            doc_terms: BTreeMap::new(),
        }
    }

    /// Reuse the stored allocation of a known term
    fn intern(&self, word: &str) -> Term {
        match self.postings.get_key_value(word) {
            Some((term, _)) => Arc::clone(term),
            None => Term::from(word),
        }
    }

    /// Index a document's words. Each distinct word gets
    /// `occurrences / words.len()`; words must already be validated and
    /// stripped of stop words. The document must not be indexed yet.
    pub fn add_document(&mut self, doc_id: DocId, words: &[&str]) {
        let mut frequencies = WordFrequencies::new();
        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                // Count occurrences first so each term is written once
                match frequencies.get_mut(*word) {
                    Some(tf) => *tf += inv_word_count,
                    None => {
                        frequencies.insert(self.intern(word), inv_word_count);
                    }
                }
            }
        }

        for (term, tf) in &frequencies {
            self.postings
                .entry(Arc::clone(term))
                .or_default()
                .insert(doc_id, *tf);
        }
        self.doc_terms.insert(doc_id, frequencies);
    }

    /// Purge a document from both directions. Returns the number of terms it
    /// had, or `None` when it was not indexed.
    ///
    /// The document's buckets are detached from `postings` and cleaned under
    /// `policy`; every bucket is touched by exactly one worker.
    pub fn remove_document(&mut self, policy: ExecutionPolicy, doc_id: DocId) -> Option<usize> {
        let frequencies = self.doc_terms.remove(&doc_id)?;

        let mut detached: Vec<(Term, Postings)> = frequencies.keys()
            .filter_map(|term| self.postings.remove_entry(term))
            .collect();

        policy.for_each_mut(&mut detached, |(_, postings)| {
            postings.remove(&doc_id);
        });

        for (term, postings) in detached {
            if postings.is_empty() {
                trace!(term = %term, "dropping empty postings");
            } else {
                self.postings.insert(term, postings);
            }
        }

        Some(frequencies.len())
    }

    pub fn postings(&self, term: &str) -> Option<&Postings> {
        self.postings.get(term)
    }

    pub fn word_frequencies(&self, doc_id: DocId) -> Option<&WordFrequencies> {
        self.doc_terms.get(&doc_id)
    }

    pub fn contains(&self, doc_id: DocId, term: &str) -> bool {
        self.doc_terms
            .get(&doc_id)
            .is_some_and(|frequencies| frequencies.contains_key(term))
    }

    /// The index's own copy of `term` if the document contains it
    pub fn stored_term(&self, doc_id: DocId, term: &str) -> Option<&str> {
        self.doc_terms
            .get(&doc_id)?
            .get_key_value(term)
            .map(|(stored, _)| stored.as_ref())
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn document_count(&self) -> usize {
        self.doc_terms.len()
    }

    /// Check that both directions hold the same triples
    pub fn is_consistent(&self) -> bool {
        let forward_ok = self.doc_terms.iter().all(|(doc_id, frequencies)| {
            frequencies.iter().all(|(term, tf)| {
                self.postings
                    .get(term)
                    .and_then(|postings| postings.get(doc_id))
                    .is_some_and(|stored| stored == tf)
            })
        });
        let inverted_ok = self.postings.iter().all(|(term, postings)| {
            !postings.is_empty()
                && postings.iter().all(|(doc_id, tf)| {
                    self.doc_terms
                        .get(doc_id)
                        .and_then(|frequencies| frequencies.get(term))
                        .is_some_and(|stored| stored == tf)
                })
        });
        forward_ok && inverted_ok
    }
}
