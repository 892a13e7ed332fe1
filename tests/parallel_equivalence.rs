use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use docsift::core::config::IndexConfig;
use docsift::core::types::DocumentStatus;
use docsift::analysis::filters::stopword::StopWordFilter;
use docsift::{DocumentIndex, ExecutionPolicy};

const WORDS: [&str; 24] = [
    "cat", "dog", "rat", "pet", "funny", "nasty", "curly", "hair", "white", "black", "big", "small",
    "collar", "tail", "sparrow", "fish", "and", "with", "in", "very", "not", "old", "young", "fancy",
];

fn random_text(rng: &mut StdRng, max_words: usize) -> String {
    let count = rng.gen_range(1..=max_words);
    (0..count)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn random_query(rng: &mut StdRng) -> String {
    let count = rng.gen_range(1..=6);
    (0..count)
        .map(|_| {
            let word = WORDS[rng.gen_range(0..WORDS.len())];
            if rng.gen_range(0..4) == 0 { format!("-{}", word) } else { word.to_string() }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn random_index(rng: &mut StdRng, docs: i32) -> DocumentIndex {
    let config = IndexConfig::default().with_worker_threads(4).with_partition_count(7);
    let mut index = DocumentIndex::with_config(StopWordFilter::from_text("and with in").unwrap(), config).unwrap();
    let statuses = [DocumentStatus::Actual, DocumentStatus::Irrelevant, DocumentStatus::Banned];
    for id in 0..docs {
        let text = random_text(rng, 12);
        let status = statuses[rng.gen_range(0..statuses.len())];
        let ratings: Vec<i32> = (0..rng.gen_range(0..4)).map(|_| rng.gen_range(-10..=10)).collect();
        index.add_document(id, &text, status, &ratings).unwrap();
    }
    index
}

#[test]
fn search_is_policy_independent() {
    let mut rng = StdRng::seed_from_u64(42);
    let index = random_index(&mut rng, 300);

    for _ in 0..200 {
        let query = random_query(&mut rng);
        let seq = index
            .find_top_documents_with_policy(ExecutionPolicy::Sequential, &query, |_, s, _| s == DocumentStatus::Actual)
            .unwrap();
        let par = index
            .find_top_documents_with_policy(ExecutionPolicy::Parallel, &query, |_, s, _| s == DocumentStatus::Actual)
            .unwrap();

        assert_eq!(seq.len(), par.len(), "query {:?}", query);
        for (a, b) in seq.iter().zip(&par) {
            assert_eq!(a.id, b.id, "query {:?}", query);
            assert_eq!(a.rating, b.rating);
            assert!((a.relevance - b.relevance).abs() < 1e-9);
        }
    }
}

#[test]
fn matching_is_policy_independent() {
    let mut rng = StdRng::seed_from_u64(7);
    let index = random_index(&mut rng, 100);

    for _ in 0..200 {
        let query = random_query(&mut rng);
        let id: i32 = rng.gen_range(0..100);
        let seq = index.match_document_with_policy(ExecutionPolicy::Sequential, &query, id).unwrap();
        let par = index.match_document_with_policy(ExecutionPolicy::Parallel, &query, id).unwrap();
        assert_eq!(seq, par, "query {:?} on {}", query, id);
    }
}

#[test]
fn removal_is_policy_independent() {
    let mut seq_rng = StdRng::seed_from_u64(99);
    let mut par_rng = StdRng::seed_from_u64(99);
    let mut seq = random_index(&mut seq_rng, 200);
    let mut par = random_index(&mut par_rng, 200);

    for id in (0..200).step_by(3) {
        seq.remove_document_with_policy(ExecutionPolicy::Sequential, id);
        par.remove_document_with_policy(ExecutionPolicy::Parallel, id);
    }

    assert_eq!(seq.document_count(), par.document_count());
    assert_eq!(seq.document_ids().collect::<Vec<_>>(), par.document_ids().collect::<Vec<_>>());
    for id in seq.document_ids() {
        assert_eq!(seq.word_frequencies(id), par.word_frequencies(id));
    }
    assert_eq!(seq.term_index().postings, par.term_index().postings);
    assert!(par.term_index().is_consistent());

    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let query = random_query(&mut rng);
        assert_eq!(
            seq.find_top_documents(&query).unwrap(),
            par.find_top_documents(&query).unwrap()
        );
    }
}
