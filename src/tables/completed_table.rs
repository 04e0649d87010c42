//! Completed Cayley tables. Every row and every column is a permutation of
//! the elements, which is necessary but not sufficient for the table to
//! describe a group.

use crate::{
    error::GroupError,
    isomorphism::Permutation,
    tables::{write_rows, Table},
};
use itertools::iproduct;
use std::{
    fmt::{self, Display, Formatter},
    fs,
    path::Path,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompletedTable {
    order: usize,
    cells: Vec<usize>,
}

impl CompletedTable {
    /// Builds a completed table from rows of elements, checking that the
    /// table is square, that every value is an element, and that it is a
    /// Latin square.
    pub fn new(rows: Vec<Vec<usize>>) -> Result<Self, GroupError> {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Some).collect())
            .collect();
        Self::try_from(Table::from_rows(rows)?)
    }

    pub(crate) fn from_cells_unchecked(order: usize, cells: Vec<usize>) -> Self {
        debug_assert_eq!(cells.len(), order * order);
        Self { order, cells }
    }

    pub fn from_text(text: &str) -> Result<Self, GroupError> {
        Self::try_from(Table::from_text(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, GroupError> {
        Self::from_text(&fs::read_to_string(path)?)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// The product `a * b`.
    pub fn get(&self, a: usize, b: usize) -> usize {
        self.cells[a * self.order + b]
    }

    pub fn row(&self, row: usize) -> &[usize] {
        &self.cells[row * self.order..(row + 1) * self.order]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.order)
    }

    /// Element 0 is the identity and rows and columns are listed in element
    /// order, i.e. row 0 and column 0 both read `0, 1, ..., order - 1`.
    pub fn has_identity_convention(&self) -> bool {
        (0..self.order)
            .all(|element| self.get(0, element) == element && self.get(element, 0) == element)
    }

    /// Checks `(a * b) * c == a * (b * c)` for every triple of elements.
    pub fn is_associative(&self) -> bool {
        iproduct!(0..self.order, 0..self.order, 0..self.order)
            .all(|(a, b, c)| self.get(self.get(a, b), c) == self.get(a, self.get(b, c)))
    }

    /// Whether this is the table of a group written with the identity
    /// convention. The Latin property holds by construction.
    pub fn is_group(&self) -> bool {
        self.has_identity_convention() && self.is_associative()
    }

    pub fn transpose(&self) -> Self {
        let cells = iproduct!(0..self.order, 0..self.order)
            .map(|(row, col)| self.get(col, row))
            .collect();
        Self::from_cells_unchecked(self.order, cells)
    }

    /// Renames every entry of the table through `permutation`. Row and column
    /// positions are left alone, see [`CompletedTable::canonicalize`].
    pub fn relabel(&self, permutation: &Permutation) -> Result<Self, GroupError> {
        if permutation.len() != self.order {
            return Err(GroupError::OrderMismatch {
                left: self.order,
                right: permutation.len(),
            });
        }
        let cells = self
            .cells
            .iter()
            .map(|&element| permutation.apply(element))
            .collect();
        Ok(Self::from_cells_unchecked(self.order, cells))
    }

    /// Reorders rows so that column 0 is ascending, then does the same to the
    /// columns by sorting the rows of the transpose. After an entrywise
    /// relabelling this restores the layout where row 0 and column 0 list
    /// the elements in order, so tables can be compared cell by cell.
    pub fn canonicalize(&self) -> Self {
        self.with_rows_sorted().transpose().with_rows_sorted().transpose()
    }

    fn with_rows_sorted(&self) -> Self {
        let mut rows: Vec<&[usize]> = self.rows().collect();
        // First column entries of a Latin square are distinct, so this order
        // is total.
        rows.sort_by_key(|row| row[0]);
        let cells = rows.concat();
        Self::from_cells_unchecked(self.order, cells)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    pub fn to_table(&self) -> Table {
        Table::from(self)
    }

    fn check_latin(&self) -> Result<(), GroupError> {
        let n = self.order;
        for line in 0..n {
            let mut in_row = vec![false; n];
            let mut in_col = vec![false; n];
            for k in 0..n {
                let (r, c) = (self.get(line, k), self.get(k, line));
                if in_row[r] {
                    return Err(GroupError::InvalidTable(format!(
                        "element {} appears twice in row {}",
                        r, line
                    )));
                }
                if in_col[c] {
                    return Err(GroupError::InvalidTable(format!(
                        "element {} appears twice in column {}",
                        c, line
                    )));
                }
                in_row[r] = true;
                in_col[c] = true;
            }
        }
        Ok(())
    }
}

impl TryFrom<Table> for CompletedTable {
    type Error = GroupError;

    fn try_from(table: Table) -> Result<Self, Self::Error> {
        Self::try_from(&table)
    }
}

impl TryFrom<&Table> for CompletedTable {
    type Error = GroupError;

    fn try_from(table: &Table) -> Result<Self, Self::Error> {
        let completed = table.to_completed().ok_or_else(|| {
            GroupError::InvalidTable("table still has empty cells".to_string())
        })?;
        completed.check_latin()?;
        Ok(completed)
    }
}

impl Display for CompletedTable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write_rows(f, self.order, &self.cells)
    }
}
