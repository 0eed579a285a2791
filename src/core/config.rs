/// Tunables for a `SearchEngine` instance. There is no persistence layer
/// here, so this is limited to the knobs the core algorithm actually has.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Shard count for the concurrent relevance accumulator. Fixed at
    /// 128 by default; kept configurable for benchmarking.
    pub accumulator_shards: usize,

    /// MAX_RESULT_DOCUMENT_COUNT.
    pub max_results: usize,

    /// Relevance-tie epsilon used when ranking.
    pub relevance_epsilon: f64,

    /// Sliding window size for the zero-result request tracker.
    pub request_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            accumulator_shards: 128,
            max_results: 5,
            relevance_epsilon: 1e-6,
            request_window: 1440,
        }
    }
}
