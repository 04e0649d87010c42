use crate::search::{SearchConfig, SearchStatus};
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

const LOG_INTERVAL: Duration = Duration::from_secs(10);
const MEMORY_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Time and memory budget of a search. Memory is sampled at most once per
/// second, and only when a memory limit is set.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
    last_sample_time: Instant,
}

impl TerminationCondition {
    pub fn new(time_limit: Option<Duration>, memory_limit_mb: Option<usize>) -> Self {
        info!(
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
        );
        Self {
            time_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
            last_sample_time: Instant::now(),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.time_limit(), config.memory_limit_mb)
    }

    /// Called once per expanded state.
    pub fn update(&mut self) {
        if self.memory_limit_mb.is_some() && self.last_sample_time.elapsed() > MEMORY_SAMPLE_INTERVAL
        {
            self.sample_memory();
        }
        if self.last_log_time.elapsed() > LOG_INTERVAL {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn sample_memory(&mut self) -> Option<usize> {
        self.last_sample_time = Instant::now();
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    pub fn log(&mut self) {
        let memory_usage = self.sample_memory();
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        self.sample_memory();
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    pub fn should_terminate(&self) -> Option<SearchStatus> {
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() >= time_limit {
                return Some(SearchStatus::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(SearchStatus::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_limits_never_terminate() {
        let mut condition = TerminationCondition::new(None, None);
        condition.update();
        assert_eq!(condition.should_terminate(), None);
    }

    #[test]
    fn zero_time_limit_terminates_immediately() {
        let condition = TerminationCondition::new(Some(Duration::ZERO), None);
        assert_eq!(
            condition.should_terminate(),
            Some(SearchStatus::TimeLimitExceeded)
        );
    }

    #[test]
    fn generous_limits_do_not_terminate() {
        let config = SearchConfig::default()
            .with_time_limit(Duration::from_secs(3600))
            .with_memory_limit_mb(usize::MAX);
        let mut condition = TerminationCondition::from_config(&config);
        condition.log();
        assert_eq!(condition.should_terminate(), None);
    }
}
