//! Example: which optimum is reported when several exist.
//!
//! The traceback leaves an item out whenever that loses no value, so the
//! selection depends on item order even though the optimum does not.
//!
//! Run with:
//! `cargo run --example tie_break`

use knapsack_dp::{optimize, Item, KnapsackError};

fn main() -> Result<(), KnapsackError> {
    let forward = [Item::new(2, 3), Item::new(2, 3), Item::new(4, 6)];
    let reversed = [Item::new(4, 6), Item::new(2, 3), Item::new(2, 3)];

    for (label, items) in [("forward", &forward), ("reversed", &reversed)] {
        let solution = optimize(items, 4)?;
        println!(
            "{label:>8}: value = {}, selected = {:?}, mask = {:?}",
            solution.value,
            solution.selected,
            solution.selection_mask()
        );
    }
    Ok(())
}
