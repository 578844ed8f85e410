//! Traceback over a filled [`StateTable`].
//!
//! Starting at `(n, W)`, each row is compared with the row above it at the
//! current budget. A changed cell means the include branch won there, so the
//! item is selected and its weight is subtracted from the budget. An equal
//! cell means the item was skipped.
//!
//! The fill takes the include branch only on strict improvement, so equality
//! here is exactly "exclusion was at least as good". Preferring inclusion on
//! ties in the fill would need a different test here; both sides change
//! together or selections stop matching the reported optimum.

use crate::problem::Item;
use crate::table::StateTable;

/// Recover the selected item indices, ascending.
///
/// `items` must be the sequence `table` was filled from, in the same order.
/// The budget is not required to reach zero.
///
/// # Panics
/// Panics if `items.len()` differs from the table's item count, or if a
/// selected item does not fit the remaining budget. Neither happens for a
/// table filled from `items`.
pub fn reconstruct(table: &StateTable, items: &[Item]) -> Vec<usize> {
    assert_eq!(
        items.len(),
        table.item_count(),
        "table was filled from a different item sequence"
    );
    let mut selected = Vec::new();
    let mut w = table.capacity();

    for i in (1..table.rows()).rev() {
        if table.get(i, w) != table.get(i - 1, w) {
            let weight = usize::try_from(items[i - 1].weight).unwrap_or(usize::MAX);
            // the fill only records inclusion when the item fits
            assert!(weight <= w, "item {} weighs {weight} > budget {w}", i - 1);
            selected.push(i - 1);
            w -= weight;
        }
    }

    selected.reverse();
    selected
}
