use crate::tables::CompletedTable;

/// The Klein four-group, every element is its own inverse.
pub const KLEIN_FOUR: [[usize; 4]; 4] = [[0, 1, 2, 3], [1, 0, 3, 2], [2, 3, 0, 1], [3, 2, 1, 0]];

/// Three labellings of the cyclic group of order four.
pub const CYCLIC_FOUR_A: [[usize; 4]; 4] = [[0, 1, 2, 3], [1, 0, 3, 2], [2, 3, 1, 0], [3, 2, 0, 1]];
pub const CYCLIC_FOUR_B: [[usize; 4]; 4] = [[0, 1, 2, 3], [1, 2, 3, 0], [2, 3, 0, 1], [3, 0, 1, 2]];
pub const CYCLIC_FOUR_C: [[usize; 4]; 4] = [[0, 1, 2, 3], [1, 3, 0, 2], [2, 0, 3, 1], [3, 2, 1, 0]];

/// A reduced Latin square in which every element squares to the identity.
/// No group of order five has that property, so it cannot be associative.
pub const NON_ASSOCIATIVE_FIVE: [[usize; 5]; 5] = [
    [0, 1, 2, 3, 4],
    [1, 0, 3, 4, 2],
    [2, 4, 0, 1, 3],
    [3, 2, 4, 0, 1],
    [4, 3, 1, 2, 0],
];

pub const ORDER_FOUR_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/order_four.txt"
));

pub fn completed<const N: usize>(rows: &[[usize; N]; N]) -> CompletedTable {
    CompletedTable::new(rows.iter().map(|row| row.to_vec()).collect())
        .expect("fixture should be a Latin square")
}
