//! Input validation, run before any table is allocated.

use crate::error::{KnapsackError, Result};
use crate::problem::{Item, Weight};
use crate::utils::{table_cells, MAX_TABLE_CELLS};

/// Validated table dimensions: `item_count + 1` rows, `capacity + 1` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub item_count: usize,
    pub capacity: usize,
}

impl Dimensions {
    pub fn rows(&self) -> usize {
        self.item_count + 1
    }

    pub fn cols(&self) -> usize {
        self.capacity + 1
    }
}

/// Check the preconditions of an optimization run.
///
/// Fails when the capacity or any weight or value is negative, or when the
/// table would not fit the index space. The ceiling is [`MAX_TABLE_CELLS`];
/// `max_cells`, if set, lowers it further.
///
/// Empty item sequences and zero capacity are valid.
pub fn validate(items: &[Item], capacity: Weight, max_cells: Option<usize>) -> Result<Dimensions> {
    if capacity < 0 {
        return Err(KnapsackError::NegativeCapacity { capacity });
    }
    for (index, item) in items.iter().enumerate() {
        if item.weight < 0 {
            return Err(KnapsackError::NegativeWeight {
                index,
                weight: item.weight,
            });
        }
        if item.value < 0 {
            return Err(KnapsackError::NegativeValue {
                index,
                value: item.value,
            });
        }
    }

    let limit = max_cells.map_or(MAX_TABLE_CELLS, |m| m.min(MAX_TABLE_CELLS));
    let too_large = || KnapsackError::TableTooLarge {
        items: items.len(),
        capacity,
        limit,
    };
    let cap = usize::try_from(capacity).map_err(|_| too_large())?;
    match table_cells(items.len(), cap) {
        Some(cells) if cells <= limit => Ok(Dimensions {
            item_count: items.len(),
            capacity: cap,
        }),
        _ => Err(too_large()),
    }
}
