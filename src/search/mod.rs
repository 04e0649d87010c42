mod search_config;
mod search_statistics;
mod table_searcher;
mod termination_condition;
mod verbosity;
mod visited_set;

pub use search_config::{SearchConfig, StopCondition, Traversal};
pub use search_statistics::SearchStatistics;
pub use table_searcher::{enumerate, find_first, SearchOutcome, SearchStatus, TableSearcher};
pub use termination_condition::TerminationCondition;
pub use verbosity::Verbosity;
pub use visited_set::VisitedSet;
