//! Error types for the knapsack optimizer.
//!
//! Every failure falls into one of two kinds:
//! - invalid input, detected by the validator before any table is allocated;
//! - arithmetic overflow, detected while filling the table.
//!
//! Neither kind is retried or downgraded to a default result.

use thiserror::Error;

/// Errors produced by an optimization run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    #[error("invalid input: capacity {capacity} is negative")]
    NegativeCapacity { capacity: i64 },

    #[error("invalid input: item {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: i64 },

    #[error("invalid input: item {index} has negative value {value}")]
    NegativeValue { index: usize, value: i64 },

    #[error("invalid input: {weights} weights but {values} values")]
    LengthMismatch { weights: usize, values: usize },

    #[error(
        "invalid input: table for {items} items and capacity {capacity} exceeds the {limit}-cell limit"
    )]
    TableTooLarge {
        items: usize,
        capacity: i64,
        limit: usize,
    },

    #[error("invalid input: allocator refused a table of {cells} cells")]
    TableAllocation { cells: usize },

    #[error("arithmetic overflow accumulating value at row {row}, capacity {capacity}")]
    ArithmeticOverflow { row: usize, capacity: usize },
}

impl KnapsackError {
    /// True for every variant that rejects the instance itself: validator
    /// failures and tables the allocator refuses.
    pub fn is_invalid_input(&self) -> bool {
        !self.is_overflow()
    }

    /// True if the table fill aborted because a value sum left the `i64` range.
    pub fn is_overflow(&self) -> bool {
        matches!(self, KnapsackError::ArithmeticOverflow { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;

#[cfg(test)]
mod tests {
    use super::KnapsackError;

    #[test]
    fn classifies_the_two_kinds() {
        let invalid = KnapsackError::NegativeWeight {
            index: 0,
            weight: -1,
        };
        let overflow = KnapsackError::ArithmeticOverflow {
            row: 2,
            capacity: 3,
        };
        assert!(invalid.is_invalid_input());
        assert!(!invalid.is_overflow());
        assert!(overflow.is_overflow());
        assert!(!overflow.is_invalid_input());
    }

    #[test]
    fn messages_name_the_offending_item() {
        let err = KnapsackError::NegativeValue {
            index: 3,
            value: -7,
        };
        assert_eq!(
            err.to_string(),
            "invalid input: item 3 has negative value -7"
        );
    }
}
