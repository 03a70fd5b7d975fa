use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// How often to refresh the memory reading and report resource usage.
const RESOURCE_LOG_INTERVAL: Duration = Duration::from_secs(10);

/// Optional ceilings on a search run. Engines consult this once per
/// expansion, so an exceeded ceiling stops the search at the next expansion
/// boundary rather than mid-node.
#[derive(Debug)]
pub struct TerminationCondition {
    expansion_limit: Option<u64>,
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: usize,
    last_check_time: Instant,
}

impl TerminationCondition {
    pub fn new(
        expansion_limit: Option<u64>,
        time_limit: Option<Duration>,
        memory_limit_mb: Option<usize>,
    ) -> Self {
        info!(
            expansion_limit = expansion_limit,
            time_limit = time_limit.map(|limit| limit.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
            "creating termination condition"
        );
        Self {
            expansion_limit,
            time_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: 0,
            last_check_time: Instant::now(),
        }
    }

    /// Checks every ceiling, returning the limit outcome to report when one
    /// is exceeded. The memory reading is refreshed at most once per
    /// [`RESOURCE_LOG_INTERVAL`] because it costs a procfs round trip.
    pub fn should_terminate(&mut self, expanded_nodes: u64) -> Option<SearchResult> {
        self.refresh_if_needed();
        if let Some(limit) = self.expansion_limit {
            if expanded_nodes >= limit {
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        if let Some(limit) = self.time_limit {
            if self.start_time.elapsed() > limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(limit) = self.memory_limit_mb {
            if self.peak_memory_usage_mb > limit {
                return Some(SearchResult::MemoryLimitExceeded);
            }
        }
        None
    }

    fn refresh_if_needed(&mut self) {
        if self.last_check_time.elapsed() > RESOURCE_LOG_INTERVAL {
            self.last_check_time = Instant::now();
            self.refresh();
            info!(
                search_time = self.start_time.elapsed().as_secs_f64(),
                peak_memory_usage_mb = self.peak_memory_usage_mb,
                "resource usage"
            );
        }
    }

    fn refresh(&mut self) {
        if let Some(usage) = memory_stats() {
            self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(usage.physical_mem >> 20);
        }
    }

    pub fn finalise(&mut self) {
        self.refresh();
        info!(
            search_time = self.start_time.elapsed().as_secs_f64(),
            peak_memory_usage_mb = self.peak_memory_usage_mb,
            "final resource usage"
        );
    }
}

impl Default for TerminationCondition {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_by_default() {
        let mut condition = TerminationCondition::default();
        assert_eq!(condition.should_terminate(0), None);
        assert_eq!(condition.should_terminate(u64::MAX), None);
    }

    #[test]
    fn expansion_ceiling_fires_at_the_limit() {
        let mut condition = TerminationCondition::new(Some(5), None, None);
        assert_eq!(condition.should_terminate(4), None);
        assert_eq!(
            condition.should_terminate(5),
            Some(SearchResult::ExpansionLimitExceeded)
        );
    }

    #[test]
    fn time_ceiling_fires_once_elapsed() {
        let mut condition = TerminationCondition::new(None, Some(Duration::from_millis(1)), None);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(
            condition.should_terminate(0),
            Some(SearchResult::TimeLimitExceeded)
        );
    }
}
