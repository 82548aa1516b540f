//! Graph statistics command
//!
//! Summarizes the adjacency graph without enumerating ladders.

use super::generate::build_graph;
use crate::graph::{GraphStats, GraphStrategy};
use crate::ladder::{ConfigError, LadderConfig};
use std::time::{Duration, Instant};

/// Result of a statistics run
pub struct StatsResult {
    pub record_count: usize,
    pub word_length: usize,
    pub strategy: GraphStrategy,
    pub graph: GraphStats,
    pub duration: Duration,
}

/// Build the graph and collect its statistics
///
/// # Errors
///
/// Returns `ConfigError` if the configuration is invalid.
pub fn run_stats<S: AsRef<str>>(
    records: &[S],
    config: &LadderConfig,
    strategy: GraphStrategy,
) -> Result<StatsResult, ConfigError> {
    let start = Instant::now();
    let (_, graph) = build_graph(records, config, strategy)?;

    Ok(StatsResult {
        record_count: records.len(),
        word_length: config.word_length,
        strategy,
        graph: graph.stats(),
        duration: start.elapsed(),
    })
}
