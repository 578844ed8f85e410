use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use knapsack_dp::{optimize, Item};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_items(rng: &mut StdRng, n: usize) -> Vec<Item> {
    (0..n)
        .map(|_| Item::new(rng.gen_range(1..=100), rng.gen_range(0..=1_000)))
        .collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_knapsack_perf(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_perf");
    group.sample_size(20);
    for &(n, capacity) in &[(100usize, 1_000i64), (500, 5_000), (1_000, 10_000)] {
        group.bench_function(format!("n_{n}_w_{capacity}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_items(&mut rng, n)
                },
                |items| {
                    let before = rss_kib();
                    let solution = optimize(&items, capacity).unwrap();
                    let after = rss_kib();
                    criterion::black_box(solution.value);
                    // report outside criterion's timing output
                    eprintln!(
                        "RSS KiB delta (n={n}, W={capacity}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack_perf);
criterion_main!(benches);
