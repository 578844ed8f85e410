use knapsack_dp::{optimize, Item, KnapsackEngine, KnapsackError, KnapsackProblem};

fn items(pairs: &[(i64, i64)]) -> Vec<Item> {
    pairs.iter().copied().map(Item::from).collect()
}

#[test]
fn textbook_instance() {
    let items = items(&[(2, 3), (3, 4), (4, 5), (5, 6)]);
    let solution = optimize(&items, 5).unwrap();
    assert_eq!(solution.value, 7);
    assert_eq!(solution.selected, vec![0, 1]);
    assert_eq!(solution.selection_mask(), vec![true, true, false, false]);
    assert_eq!(solution.total_weight(&items), 5);
}

#[test]
fn no_items_yields_zero() {
    for capacity in [0, 1, 17, 1_000] {
        let solution = optimize(&[], capacity).unwrap();
        assert_eq!(solution.value, 0);
        assert!(solution.is_empty());
    }
}

#[test]
fn zero_capacity_yields_zero() {
    let solution = optimize(&items(&[(1, 9), (2, 5), (7, 100)]), 0).unwrap();
    assert_eq!(solution.value, 0);
    assert!(solution.selected.is_empty());
    assert_eq!(solution.selection_mask(), vec![false; 3]);
}

#[test]
fn single_item_boundary() {
    for (w, v, capacity) in [(3, 8, 3), (3, 8, 10), (3, 8, 2), (0, 8, 0), (5, 0, 9)] {
        let solution = optimize(&items(&[(w, v)]), capacity).unwrap();
        if w <= capacity && v > 0 {
            assert_eq!((solution.value, solution.selected), (v, vec![0]));
        } else if w > capacity {
            assert_eq!((solution.value, solution.selected), (0, vec![]));
        } else {
            // zero-value item never improves a cell
            assert_eq!(solution.value, 0);
        }
    }
}

#[test]
fn item_heavier_than_budget_is_skipped() {
    let solution = optimize(&items(&[(10, 1_000), (2, 1), (3, 2)]), 5).unwrap();
    assert_eq!(solution.value, 3);
    assert_eq!(solution.selected, vec![1, 2]);
}

#[test]
fn zero_weight_items_are_free() {
    let solution = optimize(&items(&[(0, 5), (4, 4), (0, 2)]), 3).unwrap();
    assert_eq!(solution.value, 7);
    assert_eq!(solution.selected, vec![0, 2]);
}

#[test]
fn tie_prefers_excluding_later_item() {
    // {0} and {1} both reach 10
    let solution = optimize(&items(&[(4, 10), (4, 10)]), 4).unwrap();
    assert_eq!(solution.selected, vec![0]);

    // {2} alone ties {0, 1}; item 2 is left out
    let solution = optimize(&items(&[(2, 3), (2, 3), (4, 6)]), 4).unwrap();
    assert_eq!(solution.value, 6);
    assert_eq!(solution.selected, vec![0, 1]);

    // reversing the order flips which optimum is reported
    let solution = optimize(&items(&[(4, 6), (2, 3), (2, 3)]), 4).unwrap();
    assert_eq!(solution.value, 6);
    assert_eq!(solution.selected, vec![0]);
}

#[test]
fn selection_follows_table_differences() {
    let items = items(&[(3, 4), (1, 2), (4, 5), (2, 3), (0, 1)]);
    let engine = KnapsackEngine::new(KnapsackProblem::new(items.clone(), 6));
    let table = engine.build_table().unwrap();
    let (value, selected) = engine.run().unwrap();
    assert_eq!(value, table.optimum());

    let mut w = table.capacity();
    for i in (1..table.rows()).rev() {
        let changed = table.get(i, w) != table.get(i - 1, w);
        assert_eq!(changed, selected.contains(&(i - 1)), "row {i}");
        if changed {
            w -= items[i - 1].weight as usize;
        }
    }
}

#[test]
fn negative_input_is_rejected() {
    assert_eq!(
        optimize(&items(&[(-1, 5)]), 10).unwrap_err(),
        KnapsackError::NegativeWeight {
            index: 0,
            weight: -1
        }
    );
    assert!(matches!(
        optimize(&items(&[(1, -5)]), 10),
        Err(KnapsackError::NegativeValue { index: 0, .. })
    ));
    assert_eq!(
        optimize(&items(&[(1, 5)]), -3).unwrap_err(),
        KnapsackError::NegativeCapacity { capacity: -3 }
    );
}

#[test]
fn huge_capacity_is_rejected_not_allocated() {
    let err = optimize(&[], 1 << 61).unwrap_err();
    assert!(matches!(
        err,
        KnapsackError::TableTooLarge {
            items: 0,
            capacity,
            ..
        } if capacity == 1 << 61
    ));
    assert!(err.is_invalid_input());

    let items = [Item::new(1, 1), Item::new(2, 2)];
    assert!(matches!(
        optimize(&items, i64::MAX / 2),
        Err(KnapsackError::TableTooLarge { items: 2, .. })
    ));
}

#[test]
fn parallel_sequences_build_the_same_instance() {
    let problem = KnapsackProblem::from_pairs(&[2, 3, 4, 5], &[3, 4, 5, 6], 5).unwrap();
    let (value, selected) = KnapsackEngine::new(problem).run().unwrap();
    assert_eq!((value, selected), (7, vec![0, 1]));
}

#[test]
fn independent_runs_on_threads_agree() {
    let instances: Vec<(Vec<Item>, i64)> = (1..=8)
        .map(|k| {
            let pairs: Vec<(i64, i64)> = (0..12).map(|i| ((i * k) % 7 + 1, (i * 3 + k) % 11)).collect();
            (items(&pairs), 5 * k)
        })
        .collect();
    let serial: Vec<_> = instances
        .iter()
        .map(|(items, cap)| optimize(items, *cap).unwrap())
        .collect();
    let threaded: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = instances
            .iter()
            .map(|(items, cap)| s.spawn(move || optimize(items, *cap).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(serial, threaded);
}
