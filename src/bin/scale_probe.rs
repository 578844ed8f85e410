use std::env;
use std::time::Instant;

use knapsack_dp::{Item, KnapsackEngine, KnapsackError, KnapsackProblem};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Knapsack DP Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs the 0/1 knapsack optimizer on deterministic instances of growing size:");
    eprintln!(
        "  • Correctness: results match exhaustive search (up to {} items)",
        options.verify_limit
    );
    eprintln!("  • Scaling: time and table memory grow with n·W (pseudo-polynomial in W)");
    eprintln!();
    eprintln!("Metrics explained:");
    eprintln!("  • wall_s: Wall-clock time in seconds");
    eprintln!("  • rss_delta_kib: Resident memory delta in KiB");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = too large to verify,");
    eprintln!("            'rejected' = refused by the cell limit");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] Small instances against exhaustive search...");
    measurements.extend(run_exhaustive(&options, &mut sys));
    eprintln!();

    eprintln!("[2/3] Fixed item count, growing capacity...");
    measurements.extend(run_capacity_sweep(&options, &mut sys));
    eprintln!();

    eprintln!("[3/3] Fixed capacity, growing item count...");
    measurements.extend(run_item_sweep(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    max_cells: Option<usize>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 18usize;
        let mut max_cells = None;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            let (key, inline) = match arg.split_once('=') {
                Some((k, v)) => (k.to_string(), Some(v.to_string())),
                None => (arg.clone(), None),
            };
            if key == "--help" || key == "-h" {
                Options::print_help();
                std::process::exit(0);
            }
            let mut value = || -> Result<String, String> {
                match &inline {
                    Some(v) => Ok(v.clone()),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {key}")),
                }
            };
            match key.as_str() {
                "--format" => format = OutputFormat::from_str(&value()?)?,
                "--verify-limit" => {
                    verify_limit = value()?
                        .parse::<usize>()
                        .map_err(|_| "verify limit must be a non-negative integer".to_string())?;
                    if verify_limit > 24 {
                        return Err("verify limit above 24 items is impractical".to_string());
                    }
                }
                "--max-cells" => {
                    max_cells = Some(
                        value()?
                            .parse::<usize>()
                            .map_err(|_| "max cells must be a positive integer".to_string())?,
                    );
                }
                _ => return Err(format!("unrecognized argument '{arg}'")),
            }
        }

        Ok(Self {
            format,
            verify_limit,
            max_cells,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --features probe --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest item count checked by exhaustive search (default: 18, max: 24)
  --max-cells <N>               Reject instances whose table exceeds N cells
  -h, --help                    Print this help message

Examples:
  cargo run --features probe --bin scale_probe
  cargo run --features probe --bin scale_probe -- --format table --max-cells 50000000
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    cells: u64,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
    Rejected,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
            VerificationStatus::Rejected => "rejected",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
            VerificationStatus::Rejected => "-",
        }
    }
}

fn run_exhaustive(options: &Options, sys: &mut System) -> Vec<Measurement> {
    let sizes: Vec<usize> = (4..=options.verify_limit).step_by(2).collect();
    sizes
        .iter()
        .map(|&n| {
            let items = deterministic_items(n, 17, 3);
            let capacity = (n as i64) * 4;
            probe("exhaustive", options, sys, items, capacity, true)
        })
        .collect()
}

fn run_capacity_sweep(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const CAPACITIES: &[i64] = &[1_000, 4_000, 16_000, 64_000, 256_000, 1_024_000];
    let items = deterministic_items(256, 997, 5);
    CAPACITIES
        .iter()
        .map(|&capacity| probe("capacity_sweep", options, sys, items.clone(), capacity, false))
        .collect()
}

fn run_item_sweep(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const COUNTS: &[usize] = &[64, 256, 1_024, 4_096, 16_384];
    COUNTS
        .iter()
        .map(|&n| probe("item_sweep", options, sys, deterministic_items(n, 211, 7), 8_192, false))
        .collect()
}

fn probe(
    scenario: &'static str,
    options: &Options,
    sys: &mut System,
    items: Vec<Item>,
    capacity: i64,
    verify: bool,
) -> Measurement {
    let n = items.len();
    eprint!("      n={n}, W={capacity}... ");
    let cells = (n as u64 + 1) * (capacity as u64 + 1);
    let baseline = if verify { Some(brute_force(&items, capacity)) } else { None };
    let problem = KnapsackProblem::new(items, capacity);
    let engine = match options.max_cells {
        Some(limit) => KnapsackEngine::with_max_cells(problem, limit),
        None => KnapsackEngine::new(problem),
    };

    let mut value_result = 0i64;
    let mut selected_result = 0usize;
    let m = measure(scenario, format!("n={n};W={capacity}"), cells, sys, || {
        match engine.run() {
            Ok((value, selected)) => {
                value_result = value;
                selected_result = selected.len();
                match baseline {
                    Some(expected) if expected == value => (VerificationStatus::Passed, None),
                    Some(expected) => (
                        VerificationStatus::Failed,
                        Some(format!("expected {expected}, got {value}")),
                    ),
                    None => (VerificationStatus::NotChecked, None),
                }
            }
            Err(err @ KnapsackError::TableTooLarge { .. }) => {
                (VerificationStatus::Rejected, Some(err.to_string()))
            }
            Err(err) => (VerificationStatus::Failed, Some(err.to_string())),
        }
    });
    eprintln!(
        "{} value={}, selected={}, time={:.3}s, status={}",
        m.verification_status.icon(),
        value_result,
        selected_result,
        m.wall_s,
        m.verification_status.label()
    );
    m
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let count = |pred: fn(&VerificationStatus) -> bool| {
        measurements
            .iter()
            .filter(|m| pred(&m.verification_status))
            .count()
    };
    let passed = count(|s| matches!(s, VerificationStatus::Passed));
    let failed = count(|s| matches!(s, VerificationStatus::Failed));
    let rejected = count(|s| matches!(s, VerificationStatus::Rejected));
    let not_checked = count(|s| matches!(s, VerificationStatus::NotChecked));

    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {failed}");
    eprintln!("  - Rejected by cell limit: {rejected}");
    eprintln!(
        "  ○ Not checked (n > {}): {not_checked}",
        options.verify_limit
    );
    eprintln!();

    for m in measurements {
        if matches!(m.verification_status, VerificationStatus::Failed) {
            eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
            if let Some(detail) = &m.verification_detail {
                eprintln!("     Error: {detail}");
            }
        }
    }

    // ns per cell should stay roughly flat if time is Θ(n·W)
    for scenario in ["capacity_sweep", "item_sweep"] {
        let runs: Vec<&Measurement> = measurements
            .iter()
            .filter(|m| m.scenario == scenario && m.verification_status.label() != "rejected")
            .collect();
        if runs.is_empty() {
            continue;
        }
        eprintln!("  {scenario}:");
        for m in runs {
            let ns_per_cell = m.wall_s * 1e9 / m.cells.max(1) as f64;
            eprintln!(
                "    {:<24} cells={:<12} {:>8.3} ns/cell",
                m.size_desc, m.cells, ns_per_cell
            );
        }
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    cells: u64,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        cells,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,cells,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.cells,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);
    let col2 = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .fold("size".len(), usize::max);

    println!(
        "{:<col1$}  {:<col2$}  {:>14}  {:>10}  {:>14}  {:>12}  detail",
        "scenario", "size", "cells", "wall_s", "rss_delta_kib", "status",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>14}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.cells,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"cells\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.cells,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(process) => process.memory() / 1024,
        None => 0,
    }
}

/// Pseudo-random but reproducible weights in `1..=max_weight` and values in `0..1000`.
fn deterministic_items(n: usize, max_weight: i64, stride: i64) -> Vec<Item> {
    (0..n as i64)
        .map(|i| {
            let weight = (i * stride * 7 + 3) % max_weight + 1;
            let value = (i * stride * 31 + weight * 13) % 1_000;
            Item::new(weight, value)
        })
        .collect()
}

fn brute_force(items: &[Item], capacity: i64) -> i64 {
    let n = items.len();
    let mut best = 0i64;
    for mask in 0u64..(1u64 << n) {
        let (mut weight, mut value) = (0i64, 0i64);
        for (k, item) in items.iter().enumerate() {
            if mask & (1 << k) != 0 {
                weight += item.weight;
                value += item.value;
            }
        }
        if weight <= capacity {
            best = best.max(value);
        }
    }
    best
}
