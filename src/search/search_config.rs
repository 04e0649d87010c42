use crate::error::GroupError;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};
use strum_macros::{EnumIs, EnumIter};

/// What the search does after completing a table.
#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumIs,
)]
#[serde(rename_all = "kebab-case")]
pub enum StopCondition {
    /// Stop at the first completed table.
    First,
    /// Keep backtracking until every completion has been found.
    #[default]
    Exhaustive,
}

/// Which empty cells the search branches on at each step.
#[derive(
    clap::ValueEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumIs,
)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// Sweep the whole table at every step and branch on every empty cell.
    /// Relies on the visited set to avoid exploring the same state through
    /// different fill orders.
    #[default]
    FullRescan,
    /// Branch only on the first empty cell in row-major order.
    Cursor,
}

/// Settings for [`crate::search::TableSearcher`], loadable from a TOML file
/// with kebab-case keys. Missing keys take their default value.
///
/// ```toml
/// stop = "exhaustive"
/// traversal = "cursor"
/// verify-associativity = true
/// time-limit-secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchConfig {
    pub stop: StopCondition,
    pub traversal: Traversal,
    /// Discard completed tables that are not associative. Off by default, in
    /// which case the search reports every reduced Latin square.
    pub verify_associativity: bool,
    pub time_limit_secs: Option<f64>,
    pub memory_limit_mb: Option<usize>,
}

impl SearchConfig {
    pub fn from_toml(text: &str) -> Result<Self, GroupError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, GroupError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    pub fn with_stop(mut self, stop: StopCondition) -> Self {
        self.stop = stop;
        self
    }

    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn with_associativity_check(mut self, verify_associativity: bool) -> Self {
        self.verify_associativity = verify_associativity;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit_secs = Some(time_limit.as_secs_f64());
        self
    }

    pub fn with_memory_limit_mb(mut self, memory_limit_mb: usize) -> Self {
        self.memory_limit_mb = Some(memory_limit_mb);
        self
    }

    /// Negative or non-finite limits are ignored.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}
