//! Read-only classifiers over a populated grid

use super::matrix::ChildrenMatrix;
use super::types::Element;

/// Number of occupied slots in a row tuple
pub fn tuple_occupancy(tuple: &[Option<&Element>]) -> usize {
    tuple.iter().filter(|slot| slot.is_some()).count()
}

/// Number of occupied slots in a row, 0 for rows outside the grid
pub fn row_occupancy(matrix: &ChildrenMatrix<'_>, row_index: usize) -> usize {
    tuple_occupancy(matrix.row(row_index))
}

/// True when every occupied slot shares one column index
pub fn is_single_column(matrix: &ChildrenMatrix<'_>) -> bool {
    let mut columns = matrix.occupied().map(|(slot, _)| slot.column);
    match columns.next() {
        Some(first) => columns.all(|column| column == first),
        None => true,
    }
}

/// True when every occupied slot shares one row index
pub fn is_single_row(matrix: &ChildrenMatrix<'_>) -> bool {
    let mut rows = matrix.occupied().map(|(slot, _)| slot.row);
    match rows.next() {
        Some(first) => rows.all(|row| row == first),
        None => true,
    }
}

/// Occupied elements in row-major order, skipping empty slots
pub fn flatten<'m, 'a>(matrix: &'m ChildrenMatrix<'a>) -> impl Iterator<Item = &'a Element> + 'm {
    matrix.occupied().map(|(_, element)| element)
}
