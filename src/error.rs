use thiserror::Error;

/// Everything that can go wrong when building, searching or comparing
/// Cayley tables.
#[derive(Debug, Error)]
pub enum GroupError {
    /// Tables need at least one element, the identity.
    #[error("group order must be at least 1, got {0}")]
    InvalidOrder(usize),
    /// Isomorphism is only defined between tables of the same order.
    #[error("cannot compare a table of order {left} with a table of order {right}")]
    OrderMismatch { left: usize, right: usize },
    #[error("invalid table: {0}")]
    InvalidTable(String),
    #[error("failed to parse table text: {0}")]
    Parse(String),
    #[error("invalid search config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
