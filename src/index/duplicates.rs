use std::collections::{BTreeMap, BTreeSet};
use tracing::info;
use crate::core::types::DocId;
use crate::index::document_index::DocumentIndex;

/// Remove documents whose set of distinct terms equals that of a document with
/// a lower id. Word counts and order do not matter. Returns the removed ids in
/// ascending order.
pub fn remove_duplicates(index: &mut DocumentIndex) -> Vec<DocId> {
    let mut seen: BTreeSet<Vec<&str>> = BTreeSet::new();
    let mut duplicates = Vec::new();

    // ids ascend, so the first document of each term set is the one kept
    for doc_id in index.document_ids() {
        let terms: Vec<&str> = index.word_frequencies(doc_id)
            .keys()
            .map(|term| term.as_ref())
            .collect();
        if !seen.insert(terms) {
            duplicates.push(doc_id);
        }
    }

    for &doc_id in &duplicates {
        info!(doc_id = %doc_id, "found duplicate document");
        index.remove_document(doc_id);
    }

    duplicates
}

/// Group live ids by term set without removing anything
pub fn duplicate_groups(index: &DocumentIndex) -> Vec<Vec<DocId>> {
    let mut groups: BTreeMap<Vec<&str>, Vec<DocId>> = BTreeMap::new();
    for doc_id in index.document_ids() {
        let terms: Vec<&str> = index.word_frequencies(doc_id)
            .keys()
            .map(|term| term.as_ref())
            .collect();
        groups.entry(terms).or_default().push(doc_id);
    }
    groups.into_values()
        .filter(|ids| ids.len() > 1)
        .collect()
}
