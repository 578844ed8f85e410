use crate::{KnapsackEngine, KnapsackProblem};

/// Configures a [`KnapsackEngine`].
///
/// ```
/// use knapsack_dp::{Item, KnapsackEngineBuilder, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(vec![Item::new(1, 2)], 1_000_000);
/// let engine = KnapsackEngineBuilder::new(problem).with_max_cells(1_000).build();
/// assert!(engine.run().is_err());
/// ```
pub struct KnapsackEngineBuilder {
    problem: KnapsackProblem,
    max_cells: Option<usize>,
}

impl KnapsackEngineBuilder {
    pub fn new(problem: KnapsackProblem) -> Self {
        Self {
            problem,
            max_cells: None,
        }
    }
    /// Reject instances whose table would exceed `max_cells` cells.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }
    pub fn build(self) -> KnapsackEngine {
        match self.max_cells {
            Some(limit) => KnapsackEngine::with_max_cells(self.problem, limit),
            None => KnapsackEngine::new(self.problem),
        }
    }
}
