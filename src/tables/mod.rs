//! Cayley tables, both partially filled ones used during the search and
//! completed Latin squares handed out to callers.

mod completed_table;
mod table;

pub use completed_table::CompletedTable;
pub use table::{Candidates, Table};

use std::fmt::{self, Display, Formatter};

/// Symbol used for an empty cell in the text format.
pub const EMPTY_SYMBOL: char = '.';

/// Symbol repeated once per column on the line that closes a table.
pub const SEPARATOR_SYMBOL: char = '-';

/// Writes `order` rows of space separated cells, followed by the dashed
/// separator line. Both table kinds print through this so that the output can
/// always be read back by [`crate::parsers::parse_tables`].
fn write_rows<T: Display>(
    f: &mut Formatter,
    order: usize,
    cells: impl IntoIterator<Item = T>,
) -> fmt::Result {
    let mut cells = cells.into_iter();
    for _ in 0..order {
        let row: Vec<String> = cells.by_ref().take(order).map(|c| c.to_string()).collect();
        writeln!(f, "{}", row.join(" "))?;
    }
    let separator = vec![SEPARATOR_SYMBOL.to_string(); order];
    writeln!(f, "{}", separator.join(" "))
}
