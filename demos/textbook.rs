//! Example: the textbook 0/1 knapsack instance.
//!
//! Run with:
//! `cargo run --example textbook`

use knapsack_dp::{KnapsackEngine, KnapsackError, KnapsackProblem};

fn main() -> Result<(), KnapsackError> {
    let weights = [2, 3, 4, 5];
    let values = [3, 4, 5, 6];
    let capacity = 5;

    let problem = KnapsackProblem::from_pairs(&weights, &values, capacity)?;
    let engine = KnapsackEngine::new(problem);

    let table = engine.build_table()?;
    println!("State table ({} x {}):", table.rows(), table.cols());
    for i in 0..table.rows() {
        println!("  row {i}: {:?}", table.row(i));
    }

    let solution = engine.solve()?;
    println!("\nMaximum value: {}", solution.value);
    for &k in &solution.selected {
        let item = engine.problem().items[k];
        println!(
            "Item {} included (weight = {}, value = {})",
            k + 1,
            item.weight,
            item.value
        );
    }
    println!(
        "Total weight: {} / {capacity}",
        solution.total_weight(&engine.problem().items)
    );
    Ok(())
}
