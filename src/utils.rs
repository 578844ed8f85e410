//! Assorted utilities and helpers.

use std::mem::size_of;

use crate::problem::Value;

/// Largest cell count whose buffer size in bytes fits in `isize`.
pub const MAX_TABLE_CELLS: usize = isize::MAX as usize / size_of::<Value>();

/// Number of cells in an `(items + 1) × (capacity + 1)` state table.
///
/// Returns `None` when the count exceeds [`MAX_TABLE_CELLS`], the hard
/// ceiling on the table's index space.
#[inline]
pub fn table_cells(items: usize, capacity: usize) -> Option<usize> {
    let rows = items.checked_add(1)?;
    let cols = capacity.checked_add(1)?;
    rows.checked_mul(cols).filter(|&cells| cells <= MAX_TABLE_CELLS)
}

/// Row-major offset of cell `(row, col)` in a table with `cols` columns.
#[inline]
pub(crate) fn cell_offset(row: usize, col: usize, cols: usize) -> usize {
    row * cols + col
}
