use crate::tables::Table;
use std::collections::HashSet;

/// Every table state a search has expanded, partial or complete. States are
/// compared by their cells, so reaching the same assignment through a
/// different fill order is detected. Nothing is ever removed.
#[derive(Debug, Default)]
pub struct VisitedSet {
    states: HashSet<Table>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `table`. Returns false if an equal table was already recorded.
    pub fn insert(&mut self, table: &Table) -> bool {
        if self.states.contains(table) {
            return false;
        }
        self.states.insert(table.clone())
    }

    pub fn contains(&self, table: &Table) -> bool {
        self.states.contains(table)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
