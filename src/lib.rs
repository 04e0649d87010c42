#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

// Crate dependencies used in binary but not in library. Unfortunately cargo
// does not yet allow specifying dependencies for binaries only.
use humantime as _;

pub mod error;
pub mod isomorphism;
pub mod parsed_types;
pub mod parsers;
pub mod search;
pub mod tables;

#[cfg(test)]
mod test_utils;

pub use error::GroupError;
pub use isomorphism::{classify, find_isomorphism, isomorphic, Permutation};
pub use search::{enumerate, find_first};
pub use tables::{CompletedTable, Table};
