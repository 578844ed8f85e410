//! Exact 0/1 knapsack optimizer.
//!
//! Given items with a weight and a value and a capacity, this crate computes
//! the largest total value whose weight fits the capacity, and reports which
//! items achieve it.
//!
//! ## Pipeline
//! 1. [`validate`](validate::validate) rejects negative capacities, weights
//!    or values and tables too large to index.
//! 2. [`fill`](table::fill) builds the `(n + 1) × (W + 1)` [`StateTable`]
//!    bottom-up, failing on value overflow instead of wrapping.
//! 3. [`reconstruct`](reconstruct::reconstruct) walks the table backwards to
//!    recover the selected items.
//!
//! Time and memory are Θ(n·W), pseudo-polynomial in the capacity.
//!
//! ## Quick start
//! ```
//! use knapsack_dp::{optimize, Item};
//!
//! let items = [Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)];
//! let solution = optimize(&items, 5)?;
//! assert_eq!(solution.value, 7);
//! assert_eq!(solution.selected, vec![0, 1]);
//! assert_eq!(solution.total_weight(&items), 5);
//! # Ok::<(), knapsack_dp::KnapsackError>(())
//! ```
//!
//! ## Ties
//! When several selections reach the optimum, exactly one is returned: the
//! traceback leaves an item out whenever leaving it out loses nothing. The
//! result is deterministic for a given item order.

pub mod builder;
pub mod engine;
pub mod error;
pub mod problem;
pub mod reconstruct;
pub mod table;
pub mod utils;
pub mod validate;

pub use crate::builder::KnapsackEngineBuilder;
pub use crate::engine::{optimize, KnapsackEngine};
pub use crate::error::{KnapsackError, Result};
pub use crate::problem::{Item, KnapsackProblem, Solution, Value, Weight};
pub use crate::table::StateTable;
