//! Knapsack engine.
//!
//! A run is a three-stage pipeline:
//! 1. Validate the instance (no allocation on failure).
//! 2. Fill the state table bottom-up.
//! 3. Walk the table backwards to recover the selection.
//!
//! The table is created, filled, read and dropped inside a single run. Engines
//! share no state, so independent runs may execute on different threads.
//! There is no cancellation: a caller that needs bounded latency should cap
//! the table size with [`KnapsackEngine::with_max_cells`] up front.

use crate::error::Result;
use crate::problem::{Item, KnapsackProblem, Solution, Value, Weight};
use crate::reconstruct::reconstruct;
use crate::table::{fill, StateTable};
use crate::validate::{validate, Dimensions};

/// 0/1 knapsack engine for a given problem instance.
///
/// Typical usage:
/// ```
/// use knapsack_dp::{Item, KnapsackEngine, KnapsackProblem};
///
/// let items = vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)];
/// let engine = KnapsackEngine::new(KnapsackProblem::new(items, 5));
/// let (value, selected) = engine.run()?;
/// assert_eq!(value, 7);
/// assert_eq!(selected, vec![0, 1]);
/// # Ok::<(), knapsack_dp::KnapsackError>(())
/// ```
#[derive(Clone, Debug)]
pub struct KnapsackEngine {
    problem: KnapsackProblem,
    max_cells: Option<usize>,
}

impl KnapsackEngine {
    /// Create an engine bounded only by [`MAX_TABLE_CELLS`](crate::utils::MAX_TABLE_CELLS).
    pub fn new(problem: KnapsackProblem) -> Self {
        Self {
            problem,
            max_cells: None,
        }
    }

    /// Create an engine that rejects instances needing more than `max_cells`
    /// table cells.
    pub fn with_max_cells(problem: KnapsackProblem, max_cells: usize) -> Self {
        Self {
            problem,
            max_cells: Some(max_cells),
        }
    }

    pub fn problem(&self) -> &KnapsackProblem {
        &self.problem
    }

    /// Mutable access, e.g. to reuse the engine for a modified instance.
    pub fn problem_mut(&mut self) -> &mut KnapsackProblem {
        &mut self.problem
    }

    pub fn max_cells(&self) -> Option<usize> {
        self.max_cells
    }

    /// Stage 1: check the instance and return its table dimensions.
    pub fn validate(&self) -> Result<Dimensions> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("validate", items = self.problem.items.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let res = validate(&self.problem.items, self.problem.capacity, self.max_cells);
        #[cfg(feature = "tracing")]
        let res = res.inspect_err(|err| tracing::debug!(%err, "instance rejected"));
        res
    }

    /// Stages 1 and 2: validate, then return the filled state table.
    pub fn build_table(&self) -> Result<StateTable> {
        let dims = self.validate()?;

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "fill_table",
            rows = dims.rows(),
            cols = dims.cols()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let res = fill(&self.problem.items, dims);
        #[cfg(feature = "tracing")]
        let res = res.inspect_err(|err| tracing::debug!(%err, "table fill aborted"));
        res
    }

    /// Run the full pipeline.
    ///
    /// Returns `(optimal_value, selected_indices)`; indices are ascending and
    /// refer to `problem().items`. On ties the later item is left out.
    pub fn run(&self) -> Result<(Value, Vec<usize>)> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "knapsack_run",
            items = self.problem.items.len(),
            capacity = self.problem.capacity
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = self.build_table()?;

        let selected = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("reconstruct");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            reconstruct(&table, &self.problem.items)
        };
        let value = table.optimum();

        #[cfg(feature = "tracing")]
        tracing::debug!(value, selected = selected.len(), "knapsack solved");

        Ok((value, selected))
    }

    /// Like [`run`](Self::run), packaged as a [`Solution`].
    pub fn solve(&self) -> Result<Solution> {
        let (value, selected) = self.run()?;
        Ok(Solution {
            value,
            selected,
            item_count: self.problem.items.len(),
        })
    }
}

/// Solve one instance: the best total value within `capacity` and the items
/// that achieve it.
///
/// ```
/// use knapsack_dp::{optimize, Item};
///
/// let items: Vec<Item> = vec![(2, 3).into(), (3, 4).into(), (4, 5).into(), (5, 6).into()];
/// let solution = optimize(&items, 5)?;
/// assert_eq!(solution.value, 7);
/// assert_eq!(solution.selected, vec![0, 1]);
/// # Ok::<(), knapsack_dp::KnapsackError>(())
/// ```
pub fn optimize(items: &[Item], capacity: Weight) -> Result<Solution> {
    KnapsackEngine::new(KnapsackProblem::new(items.to_vec(), capacity)).solve()
}
