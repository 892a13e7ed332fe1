/// Tuning knobs for a [`DocumentIndex`](crate::index::document_index::DocumentIndex).
#[derive(Debug, Clone)]
pub struct IndexConfig {
    pub max_results: usize,          // Top-K cut-off for searches
    pub relevance_epsilon: f64,      // Relevances closer than this rank by rating

    pub worker_threads: usize,       // Size of the index's rayon pool
    pub partition_count: usize,      // Lock domains of the relevance accumulator
}

/// Accumulator partitions per worker thread
const PARTITIONS_PER_WORKER: usize = 8;

impl IndexConfig {
    /// Resize the worker pool, keeping the partition count proportional.
    pub fn with_worker_threads(mut self, workers: usize) -> Self {
        self.worker_threads = workers.max(1);
        self.partition_count = self.worker_threads * PARTITIONS_PER_WORKER;
        self
    }

    pub fn with_partition_count(mut self, partitions: usize) -> Self {
        self.partition_count = partitions.max(1);
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        let workers = num_cpus::get().max(1);
        IndexConfig {
            max_results: 5,
            relevance_epsilon: 1e-6,
            worker_threads: workers,
            partition_count: workers * PARTITIONS_PER_WORKER,
        }
    }
}
