use std::time::{Duration, Instant};
use tracing::info;

/// How often to report progress during long searches.
const SEARCH_LOG_INTERVAL: Duration = Duration::from_secs(10);

/// Counters every engine fills in while it runs. Expansion means taking a
/// node out of the frontier and generating its children; generation counts
/// only boards never seen before in engines that deduplicate.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    expanded_nodes: u64,
    evaluated_nodes: u64,
    generated_nodes: u64,
    reopened_nodes: u64,
    generated_moves: u64,
    /// Times an iterative engine restarted with a larger bound.
    bound_iterations: u64,
    search_start_time: Instant,
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            reopened_nodes: 0,
            generated_moves: 0,
            bound_iterations: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    fn log_statistics(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            reopened_nodes = self.reopened_nodes,
            generated_moves = self.generated_moves,
            bound_iterations = self.bound_iterations,
            "search statistics"
        );
    }

    fn log_statistics_if_needed(&mut self) {
        if self.last_log_time.elapsed() > SEARCH_LOG_INTERVAL {
            self.last_log_time = Instant::now();
            self.log_statistics();
        }
    }

    pub fn finalise_search(&mut self) {
        info!(
            search_duration = self.search_start_time.elapsed().as_secs_f64(),
            "search finished"
        );
        self.log_statistics();
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_statistics_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }

    pub fn increment_generated_moves(&mut self, count: usize) {
        self.generated_moves += count as u64;
    }

    pub fn increment_bound_iterations(&mut self) {
        self.bound_iterations += 1;
    }

    pub fn expanded_nodes(&self) -> u64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> u64 {
        self.generated_nodes
    }

    pub fn generated_moves(&self) -> u64 {
        self.generated_moves
    }

    pub fn bound_iterations(&self) -> u64 {
        self.bound_iterations
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
