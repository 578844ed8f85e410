//! Problem instance and solution types.
//!
//! An instance is an ordered sequence of [`Item`]s plus a capacity. The order
//! of the items defines the row indexing of the state table and the indices
//! reported in a [`Solution`].

use crate::error::{KnapsackError, Result};

/// Item weight. Signed so that negative input can be represented and rejected.
pub type Weight = i64;

/// Item value, and the type of every state-table cell.
pub type Value = i64;

/// A `(weight, value)` pair eligible for inclusion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub weight: Weight,
    pub value: Value,
}

impl Item {
    pub fn new(weight: Weight, value: Value) -> Self {
        Self { weight, value }
    }
}

impl From<(Weight, Value)> for Item {
    fn from((weight, value): (Weight, Value)) -> Self {
        Self { weight, value }
    }
}

/// 0/1 knapsack instance: items in a fixed order and a capacity bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnapsackProblem {
    pub items: Vec<Item>,
    pub capacity: Weight,
}

impl KnapsackProblem {
    pub fn new(items: Vec<Item>, capacity: Weight) -> Self {
        Self { items, capacity }
    }

    /// Build an instance from parallel weight and value sequences.
    ///
    /// Item `k` is `(weights[k], values[k])`. Fails with
    /// [`KnapsackError::LengthMismatch`] if the sequences differ in length.
    pub fn from_pairs(weights: &[Weight], values: &[Value], capacity: Weight) -> Result<Self> {
        if weights.len() != values.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        let items = weights
            .iter()
            .zip(values)
            .map(|(&w, &v)| Item::new(w, v))
            .collect();
        Ok(Self::new(items, capacity))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Optimal value together with one selection achieving it.
///
/// `selected` holds item indices in ascending order, without duplicates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub value: Value,
    pub selected: Vec<usize>,
    pub item_count: usize,
}

impl Solution {
    /// Inclusion flag per item, in input order.
    ///
    /// # Panics
    /// Panics if a selected index is `>= item_count`.
    pub fn selection_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.item_count];
        for &idx in &self.selected {
            mask[idx] = true;
        }
        mask
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.binary_search(&index).is_ok()
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Sum of the selected items' weights.
    ///
    /// `items` must be the sequence this solution was computed from.
    ///
    /// # Panics
    /// Panics if a selected index is out of range for `items`, or if the sum
    /// overflows in a debug build.
    pub fn total_weight(&self, items: &[Item]) -> Weight {
        self.selected.iter().map(|&i| items[i].weight).sum()
    }

    /// Sum of the selected items' values; equals `self.value` for the
    /// sequence this solution was computed from.
    ///
    /// # Panics
    /// Panics if a selected index is out of range for `items`, or if the sum
    /// overflows in a debug build.
    pub fn total_value(&self, items: &[Item]) -> Value {
        self.selected.iter().map(|&i| items[i].value).sum()
    }
}
