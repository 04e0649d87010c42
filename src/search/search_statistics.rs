use std::time::{Duration, Instant};
use tracing::info;

const LOG_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of distinct table states expanded
    expanded_states: u64,
    /// Number of times a state was reached again and skipped
    pruned_states: u64,
    /// Number of candidate values generated over all branching cells
    generated_candidates: u64,
    /// Number of completed tables reached, including rejected ones
    completed_tables: u64,
    /// Number of completed tables dropped by the associativity check
    rejected_tables: u64,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self {
            expanded_states: 0,
            pruned_states: 0,
            generated_candidates: 0,
            completed_tables: 0,
            rejected_tables: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_states(&mut self) {
        self.expanded_states += 1;
        self.log_if_needed();
    }

    pub fn increment_pruned_states(&mut self) {
        self.pruned_states += 1;
    }

    pub fn increment_generated_candidates(&mut self, num_candidates: usize) {
        self.generated_candidates += num_candidates as u64;
    }

    pub fn increment_completed_tables(&mut self) {
        self.completed_tables += 1;
    }

    pub fn increment_rejected_tables(&mut self) {
        self.rejected_tables += 1;
    }

    pub fn expanded_states(&self) -> u64 {
        self.expanded_states
    }

    pub fn pruned_states(&self) -> u64 {
        self.pruned_states
    }

    pub fn generated_candidates(&self) -> u64 {
        self.generated_candidates
    }

    pub fn completed_tables(&self) -> u64 {
        self.completed_tables
    }

    pub fn rejected_tables(&self) -> u64 {
        self.rejected_tables
    }

    pub fn elapsed(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > LOG_INTERVAL {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_states = self.expanded_states,
            pruned_states = self.pruned_states,
            generated_candidates = self.generated_candidates,
            completed_tables = self.completed_tables,
            rejected_tables = self.rejected_tables,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.elapsed().as_secs_f64());
    }
}
