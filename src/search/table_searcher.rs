//! Backtracking search for completed Cayley tables.
//!
//! Starting from a table whose first row and column are fixed by the identity
//! convention, empty cells are filled with every value that keeps each row
//! and column free of repeats. After each recursive call the cell is emptied
//! again, so the whole search works on a single table. States already
//! expanded are remembered by content and skipped when reached again.

use crate::{
    error::GroupError,
    search::{
        SearchConfig, SearchStatistics, StopCondition, TerminationCondition, VisitedSet,
    },
    tables::{CompletedTable, Table},
};
use std::{collections::HashSet, ops::ControlFlow};
use strum_macros::EnumIs;
use tracing::{debug, info, trace};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs)]
pub enum SearchStatus {
    /// Every reachable state was explored.
    Exhausted,
    /// The search was configured to stop at the first completed table and
    /// found one.
    StoppedAtFirst,
    /// The time limit ran out, results are partial.
    TimeLimitExceeded,
    /// The memory limit was exceeded, results are partial.
    MemoryLimitExceeded,
}

#[derive(Debug)]
pub struct SearchOutcome {
    tables: Vec<CompletedTable>,
    status: SearchStatus,
    visited_states: usize,
    statistics: SearchStatistics,
}

impl SearchOutcome {
    /// Distinct completed tables, in the order they were found.
    pub fn tables(&self) -> &[CompletedTable] {
        &self.tables
    }

    pub fn into_tables(self) -> Vec<CompletedTable> {
        self.tables
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Size of the visited set when the search ended.
    pub fn visited_states(&self) -> usize {
        self.visited_states
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableSearcher {
    config: SearchConfig,
}

impl TableSearcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the search for tables of the given order. Each call owns a fresh
    /// visited set, so searches are independent of each other.
    pub fn search(&self, order: usize) -> Result<SearchOutcome, GroupError> {
        let mut table = Table::seeded(order)?;
        info!(
            order,
            stop = ?self.config.stop,
            traversal = ?self.config.traversal,
            verify_associativity = self.config.verify_associativity,
            "starting table search"
        );

        let mut session = SearchSession::new(&self.config);
        let status = match session.explore(&mut table) {
            ControlFlow::Continue(()) => SearchStatus::Exhausted,
            ControlFlow::Break(status) => status,
        };
        session.statistics.finalise_search();
        session.termination.finalise();

        info!(
            num_tables = session.results.len(),
            visited_states = session.visited.len(),
            status = ?status,
            "table search finished"
        );

        Ok(SearchOutcome {
            visited_states: session.visited.len(),
            tables: session.results,
            status,
            statistics: session.statistics,
        })
    }
}

/// Every completed table of the given order with row 0 and column 0 fixed to
/// `0, 1, ..., order - 1`, using the default (exhaustive, full rescan)
/// configuration.
pub fn enumerate(order: usize) -> Result<Vec<CompletedTable>, GroupError> {
    TableSearcher::default()
        .search(order)
        .map(SearchOutcome::into_tables)
}

/// The first completed table found by the default filling order.
pub fn find_first(order: usize) -> Result<Option<CompletedTable>, GroupError> {
    let config = SearchConfig::default().with_stop(StopCondition::First);
    let tables = TableSearcher::new(config).search(order)?.into_tables();
    Ok(tables.into_iter().next())
}

/// State owned by one run of the search.
struct SearchSession<'a> {
    config: &'a SearchConfig,
    visited: VisitedSet,
    results: Vec<CompletedTable>,
    seen_results: HashSet<CompletedTable>,
    statistics: SearchStatistics,
    termination: TerminationCondition,
}

impl<'a> SearchSession<'a> {
    fn new(config: &'a SearchConfig) -> Self {
        Self {
            config,
            visited: VisitedSet::new(),
            results: vec![],
            seen_results: HashSet::new(),
            statistics: SearchStatistics::new(),
            termination: TerminationCondition::from_config(config),
        }
    }

    /// Expands `table`, leaving it exactly as it was on return.
    fn explore(&mut self, table: &mut Table) -> ControlFlow<SearchStatus> {
        if let Some(status) = self.termination.should_terminate() {
            return ControlFlow::Break(status);
        }
        if !self.visited.insert(table) {
            self.statistics.increment_pruned_states();
            return ControlFlow::Continue(());
        }
        self.statistics.increment_expanded_states();
        self.termination.update();

        if let Some(completed) = table.to_completed() {
            return self.record(completed);
        }

        if self.config.traversal.is_cursor() {
            if let Some(cell) = table.first_empty() {
                self.branch(table, cell)?;
            }
        } else {
            // Backtracking restores every cell, so the empty cells are the
            // same before and after each branch.
            let empty_cells: Vec<_> = table.empty_cells().collect();
            for cell in empty_cells {
                self.branch(table, cell)?;
            }
        }

        ControlFlow::Continue(())
    }

    fn branch(
        &mut self,
        table: &mut Table,
        (row, col): (usize, usize),
    ) -> ControlFlow<SearchStatus> {
        let candidates = table.candidates(row, col);
        self.statistics
            .increment_generated_candidates(candidates.len());
        trace!(row, col, num_candidates = candidates.len());

        for value in candidates {
            table.set(row, col, value);
            let flow = self.explore(table);
            table.clear(row, col);
            flow?;
        }

        ControlFlow::Continue(())
    }

    fn record(&mut self, completed: CompletedTable) -> ControlFlow<SearchStatus> {
        self.statistics.increment_completed_tables();

        if self.config.verify_associativity && !completed.is_associative() {
            self.statistics.increment_rejected_tables();
            trace!("rejected non-associative table");
            return ControlFlow::Continue(());
        }

        if self.seen_results.insert(completed.clone()) {
            debug!(num_tables = self.results.len() + 1, "found completed table");
            self.results.push(completed);
        }

        if self.config.stop.is_first() {
            return ControlFlow::Break(SearchStatus::StoppedAtFirst);
        }
        ControlFlow::Continue(())
    }
}
