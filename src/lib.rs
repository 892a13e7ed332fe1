//! In-memory document search with TF-IDF ranking and optional parallel execution.

pub mod core;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod search;
pub mod query;
pub mod parallel;

pub use crate::core::config::IndexConfig;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{DocId, DocumentStatus};
pub use crate::index::document_index::DocumentIndex;
pub use crate::index::duplicates::remove_duplicates;
pub use crate::parallel::accumulator::ConcurrentAccumulator;
pub use crate::parallel::policy::ExecutionPolicy;
pub use crate::search::batch::BatchQueryProcessor;
pub use crate::search::paginator::paginate;
pub use crate::search::request_queue::RequestQueue;
pub use crate::search::results::ScoredDocument;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                          DOCSIFT STRUCT ARCHITECTURE                         │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── INDEX LAYER ─────────────────────────────────┐
│                                                                              │
│  ┌────────────────────────────────────────────────────────────────────────┐  │
│  │                          struct DocumentIndex                          │  │
│  │  config: IndexConfig              // result cap, epsilon, workers      │  │
│  │  stop_words: StopWordFilter       // words dropped from docs/queries   │  │
│  │  terms: InvertedIndex             // term <-> document frequencies     │  │
│  │  documents: BTreeMap<DocId, DocumentData>                              │  │
│  │  document_ids: BTreeSet<DocId>    // ascending iteration order         │  │
│  │  pool: Arc<ThreadPool>            // rayon workers for Parallel        │  │
│  └────────────────────────────────────────────────────────────────────────┘  │
│                                                                              │
│  ┌────────────────────────────┐  ┌────────────────────────┐                  │
│  │ struct InvertedIndex       │  │ struct DocumentData    │                  │
│  │ • postings: term->doc->tf  │  │ • rating: i32          │                  │
│  │ • doc_terms: doc->term->tf │  │ • status: Status       │                  │
│  └────────────────────────────┘  │ • text: Box<str>       │                  │
│                                  └────────────────────────┘                  │
└──────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── SEARCH LAYER ─────────────────────────────────┐
│                                                                              │
│  ┌──────────────────────┐  ┌────────────────────────┐  ┌──────────────────┐  │
│  │ struct QueryParser   │  │ struct Ranker          │  │ BatchQuery-      │  │
│  │ • plus_terms         │  │ • max_results          │  │ Processor        │  │
│  │ • minus_terms        │  │ • epsilon              │  │ • find_all_top() │  │
│  └──────────────────────┘  └────────────────────────┘  └──────────────────┘  │
│  ┌──────────────────────┐  ┌────────────────────────┐                        │
│  │ struct RequestQueue  │  │ struct Paginator       │                        │
│  │ • window of requests │  │ • fixed-size pages     │                        │
│  └──────────────────────┘  └────────────────────────┘                        │
└──────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── PARALLEL LAYER ────────────────────────────────┐
│                                                                              │
│  ┌────────────────────────────┐  ┌─────────────────────────────────────┐     │
│  │ enum ExecutionPolicy       │  │ struct ConcurrentAccumulator<K, V>  │     │
│  │ • Sequential               │  │ • partitions: Vec<Mutex<BTreeMap>>  │     │
│  │ • Parallel                 │  │ • access() -> locked value          │     │
│  └────────────────────────────┘  │ • drain() -> BTreeMap               │     │
│                                  └─────────────────────────────────────┘     │
└──────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────── RELATIONSHIPS ────────────────────────────────┐
│                                                                              │
│  DocumentIndex ──owns──> InvertedIndex ──maps──> Term ──> DocId ──> tf       │
│       │                                                                      │
│       ├──parses_with──> QueryParser ──filters_with──> StopWordFilter         │
│       │                                                                      │
│       ├──scores_with──> TfIdfScorer ──writes──> ConcurrentAccumulator        │
│       │                                                                      │
│       └──ranks_with──> Ranker ──returns──> Vec<ScoredDocument>               │
│                                                                              │
│  BatchQueryProcessor ──borrows──> DocumentIndex                              │
│  RequestQueue ──borrows──> DocumentIndex                                     │
│                                                                              │
└──────────────────────────────────────────────────────────────────────────────┘
*/
