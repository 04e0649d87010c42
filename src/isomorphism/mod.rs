//! Isomorphism of Cayley tables by exhaustive relabelling.

mod classify;
mod oracle;
mod permutation;

pub use classify::{classify, IsomorphismClass};
pub use oracle::{find_isomorphism, isomorphic};
pub use permutation::Permutation;
