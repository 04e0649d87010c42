//! A possibly partial Cayley table. Cells are either an element of the group
//! (an index in `0..order`) or empty.

use crate::{
    error::GroupError,
    parsers,
    tables::{write_rows, CompletedTable, EMPTY_SYMBOL},
};
use smallvec::{smallvec, SmallVec};
use std::fmt::{self, Display, Formatter};

/// Values that may still go into a cell. Orders beyond eight are not
/// tractable for the search anyway, so this rarely spills to the heap.
pub type Candidates = SmallVec<[usize; 8]>;

/// An `order x order` table stored row-major. `get(a, b)` is the product
/// `a * b` if it is known.
///
/// Equality and hashing compare cell contents, which is what lets the search
/// recognise a state it has already explored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    order: usize,
    cells: Vec<Option<usize>>,
}

impl Table {
    /// The starting point of the search: element 0 is the identity, so row 0
    /// and column 0 both read `0, 1, ..., order - 1`, everything else is
    /// empty.
    pub fn seeded(order: usize) -> Result<Self, GroupError> {
        if order == 0 {
            return Err(GroupError::InvalidOrder(order));
        }
        let mut cells = vec![None; order * order];
        for element in 0..order {
            cells[element] = Some(element);
            cells[element * order] = Some(element);
        }
        Ok(Self { order, cells })
    }

    pub fn from_rows(rows: Vec<Vec<Option<usize>>>) -> Result<Self, GroupError> {
        let order = rows.len();
        if order == 0 {
            return Err(GroupError::InvalidOrder(order));
        }

        let mut cells = Vec::with_capacity(order * order);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != order {
                return Err(GroupError::InvalidTable(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    order
                )));
            }
            for (j, cell) in row.into_iter().enumerate() {
                if let Some(value) = cell {
                    if value >= order {
                        return Err(GroupError::InvalidTable(format!(
                            "cell ({}, {}) holds {}, which is not an element of a group of order {}",
                            i, j, value, order
                        )));
                    }
                }
                cells.push(cell);
            }
        }

        Ok(Self { order, cells })
    }

    /// Parses exactly one table from text in the format produced by
    /// [`Display`].
    pub fn from_text(text: &str) -> Result<Self, GroupError> {
        let mut tables = Self::all_from_text(text)?;
        if tables.len() != 1 {
            return Err(GroupError::Parse(format!(
                "expected exactly one table, found {}",
                tables.len()
            )));
        }
        Ok(tables.remove(0))
    }

    /// Parses every table in the text, in order of appearance.
    pub fn all_from_text(text: &str) -> Result<Vec<Self>, GroupError> {
        parsers::parse_table_text(text)?
            .into_iter()
            .map(|parsed| Self::from_rows(parsed.into_rows()))
            .collect()
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        self.cells[row * self.order + col]
    }

    /// Writes `value` into `(row, col)`.
    ///
    /// ## Panics
    /// Panics if `value` is not an element, i.e. not below the order.
    pub fn set(&mut self, row: usize, col: usize, value: usize) {
        assert!(
            value < self.order,
            "value {} is not an element of a group of order {}",
            value,
            self.order
        );
        self.cells[row * self.order + col] = Some(value);
    }

    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row * self.order + col] = None;
    }

    pub fn row(&self, row: usize) -> &[Option<usize>] {
        &self.cells[row * self.order..(row + 1) * self.order]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<usize>]> {
        self.cells.chunks(self.order)
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty cells in row-major order, skipping row 0 and column 0 which the
    /// identity convention fills in up front.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..self.order)
            .flat_map(move |row| (1..self.order).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.get(row, col).is_none())
    }

    pub fn first_empty(&self) -> Option<(usize, usize)> {
        self.empty_cells().next()
    }

    /// The values that can go into `(row, col)` without repeating an element
    /// in that row or column. Only filled cells other than `(row, col)` itself
    /// are taken into account; associativity is not considered.
    pub fn candidates(&self, row: usize, col: usize) -> Candidates {
        let mut available: SmallVec<[bool; 8]> = smallvec![true; self.order];
        for k in 0..self.order {
            if k != col {
                if let Some(value) = self.get(row, k) {
                    available[value] = false;
                }
            }
            if k != row {
                if let Some(value) = self.get(k, col) {
                    available[value] = false;
                }
            }
        }

        available
            .iter()
            .enumerate()
            .filter(|(_, free)| **free)
            .map(|(value, _)| value)
            .collect()
    }

    /// Returns the completed table if no cell is empty. The Latin property is
    /// not re-checked, callers are expected to have filled cells through
    /// [`Table::candidates`].
    pub(crate) fn to_completed(&self) -> Option<CompletedTable> {
        let cells: Option<Vec<usize>> = self.cells.iter().copied().collect();
        cells.map(|cells| CompletedTable::from_cells_unchecked(self.order, cells))
    }
}

impl From<&CompletedTable> for Table {
    fn from(table: &CompletedTable) -> Self {
        Self {
            order: table.order(),
            cells: table.cells().iter().copied().map(Some).collect(),
        }
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_rows(
            f,
            self.order,
            self.cells.iter().map(|cell| match cell {
                Some(value) => value.to_string(),
                None => EMPTY_SYMBOL.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_table_follows_identity_convention() {
        let table = Table::seeded(4).unwrap();
        assert_eq!(
            table.to_string(),
            "0 1 2 3\n1 . . .\n2 . . .\n3 . . .\n- - - -\n"
        );
        assert!(!table.is_complete());
    }

    #[test]
    fn seeded_trivial_table_is_complete() {
        let table = Table::seeded(1).unwrap();
        assert!(table.is_complete());
        assert_eq!(table.first_empty(), None);
    }

    #[test]
    fn seeded_rejects_order_zero() {
        assert!(matches!(Table::seeded(0), Err(GroupError::InvalidOrder(0))));
    }

    #[test]
    fn empty_cells_are_row_major_from_one_one() {
        let mut table = Table::seeded(3).unwrap();
        table.set(1, 1, 2);
        let empty: Vec<_> = table.empty_cells().collect();
        assert_eq!(empty, vec![(1, 2), (2, 1), (2, 2)]);
        assert_eq!(table.first_empty(), Some((1, 2)));
    }

    #[test]
    fn candidates_exclude_row_and_column_values() {
        let mut table = Table::seeded(4).unwrap();
        assert_eq!(table.candidates(1, 1).as_slice(), &[0, 2, 3]);

        table.set(1, 1, 0);
        assert_eq!(table.candidates(1, 2).as_slice(), &[3]);
        assert_eq!(table.candidates(2, 1).as_slice(), &[3]);
        // The cell's own value does not rule itself out.
        assert_eq!(table.candidates(1, 1).as_slice(), &[0, 2, 3]);
    }

    #[test]
    fn set_then_clear_restores_state() {
        let original = Table::seeded(3).unwrap();
        let mut table = original.clone();
        table.set(2, 2, 1);
        assert_ne!(table, original);
        table.clear(2, 2);
        assert_eq!(table, original);
    }

    #[test]
    #[should_panic(expected = "not an element")]
    fn set_rejects_values_outside_the_group() {
        let mut table = Table::seeded(3).unwrap();
        table.set(1, 1, 3);
    }

    #[test]
    fn from_rows_validates_shape_and_range() {
        assert!(matches!(
            Table::from_rows(vec![vec![Some(0), Some(1)], vec![Some(1)]]),
            Err(GroupError::InvalidTable(_))
        ));
        assert!(matches!(
            Table::from_rows(vec![vec![Some(0), Some(2)], vec![Some(1), None]]),
            Err(GroupError::InvalidTable(_))
        ));
        assert!(matches!(
            Table::from_rows(vec![]),
            Err(GroupError::InvalidOrder(0))
        ));
    }

    #[test]
    fn text_round_trip_keeps_empty_cells() {
        let mut table = Table::seeded(3).unwrap();
        table.set(1, 1, 2);
        let parsed = Table::from_text(&table.to_string()).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn from_text_requires_a_single_table() {
        let text = "0 1\n1 0\n- -\n0 1\n1 0\n- -\n";
        assert!(matches!(Table::from_text(text), Err(GroupError::Parse(_))));
        assert_eq!(Table::all_from_text(text).unwrap().len(), 2);
    }

    #[test]
    fn to_completed_needs_every_cell() {
        let mut table = Table::seeded(2).unwrap();
        assert!(table.to_completed().is_none());
        table.set(1, 1, 0);
        let completed = table.to_completed().unwrap();
        assert_eq!(completed.get(1, 1), 0);
    }
}
