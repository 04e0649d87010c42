//! Contains the rows of a table as written in text via the [`TableRows`]
//! type. Nothing guarantees the rows are square or in range, that is checked
//! when converting into a [`crate::tables::Table`].

/// Rows of cells, `None` being an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRows(Vec<Vec<Option<usize>>>);

impl TableRows {
    pub const fn new(rows: Vec<Vec<Option<usize>>>) -> Self {
        Self(rows)
    }

    pub const fn rows(&self) -> &Vec<Vec<Option<usize>>> {
        &self.0
    }

    pub fn into_rows(self) -> Vec<Vec<Option<usize>>> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
