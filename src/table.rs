//! State table and the bottom-up fill.
//!
//! `table[i][w]` is the best value achievable with the first `i` items under
//! budget `w`. The table is one flat row-major buffer of `(n + 1) × (W + 1)`
//! cells owned by the run that built it.
//!
//! Fill recurrence for `i = 1..=n`, `w = 0..=W`, with `(wt, v) = items[i - 1]`:
//! - `wt > w`: `table[i][w] = table[i - 1][w]`
//! - otherwise: `table[i][w] = max(table[i - 1][w], v + table[i - 1][w - wt])`
//!
//! The include branch is taken only on strict improvement, so ties keep the
//! exclude value. The traceback in [`crate::reconstruct`] relies on this.
//!
//! Time and space are both Θ(n·W). That is pseudo-polynomial: exponential in
//! the bit length of `W`. Large capacities are a scaling limit of the method,
//! bounded only by the cell ceiling checked during validation.

use std::ops::Index;

use crate::error::{KnapsackError, Result};
use crate::problem::{Item, Value};
use crate::utils::cell_offset;
use crate::validate::Dimensions;

/// Filled DP table. Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateTable {
    rows: usize,
    cols: usize,
    cells: Vec<Value>,
}

impl StateTable {
    /// Number of rows, `item_count + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `capacity + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn item_count(&self) -> usize {
        self.rows - 1
    }

    pub fn capacity(&self) -> usize {
        self.cols - 1
    }

    #[inline]
    fn checked_offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} table",
            self.rows,
            self.cols
        );
        cell_offset(row, col, self.cols)
    }

    /// Value of cell `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row >= rows()` or `col >= cols()`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Value {
        self.cells[self.checked_offset(row, col)]
    }

    /// All columns of one row.
    pub fn row(&self, row: usize) -> &[Value] {
        let start = cell_offset(row, 0, self.cols);
        &self.cells[start..start + self.cols]
    }

    /// `table[n][W]`, the optimum over all items at full capacity.
    pub fn optimum(&self) -> Value {
        self.get(self.rows - 1, self.cols - 1)
    }
}

impl Index<(usize, usize)> for StateTable {
    type Output = Value;

    fn index(&self, (row, col): (usize, usize)) -> &Value {
        &self.cells[self.checked_offset(row, col)]
    }
}

/// Fill the state table for validated `items`.
///
/// `dims` must come from [`crate::validate::validate`] on the same `items`.
/// Fails with [`KnapsackError::ArithmeticOverflow`] at the first cell whose
/// include sum leaves the `i64` range; the partial table is dropped. Fails
/// with [`KnapsackError::TableAllocation`] if the allocator refuses the buffer.
pub fn fill(items: &[Item], dims: Dimensions) -> Result<StateTable> {
    debug_assert_eq!(items.len(), dims.item_count);
    let rows = dims.rows();
    let cols = dims.cols();
    let total = rows * cols;
    let mut cells: Vec<Value> = Vec::new();
    cells
        .try_reserve_exact(total)
        .map_err(|_| KnapsackError::TableAllocation { cells: total })?;
    // row 0 stays zero
    cells.resize(total, 0);

    for i in 1..rows {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_row", row = i);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let item = items[i - 1];
        let (done, rest) = cells.split_at_mut(cell_offset(i, 0, cols));
        let prev = &done[cell_offset(i - 1, 0, cols)..];
        let cur = &mut rest[..cols];

        for w in 0..cols {
            let skip = prev[w];
            // weights are non-negative and w <= capacity <= i64::MAX
            if item.weight > w as i64 {
                cur[w] = skip;
                continue;
            }
            let residual = w - item.weight as usize;
            let take = item
                .value
                .checked_add(prev[residual])
                .ok_or(KnapsackError::ArithmeticOverflow {
                    row: i,
                    capacity: w,
                })?;
            cur[w] = if take > skip { take } else { skip };
        }
    }

    Ok(StateTable { rows, cols, cells })
}
