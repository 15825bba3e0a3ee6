//! Morphmetric Benchmark
//!
//! Times every metric of the suite over deterministic pseudo-random
//! sequences, using the same option records the library exposes.
//!
//! Usage:
//!   cargo run -p morphmetric-tools --bin metric_benchmark [-- [OPTIONS]]
//!
//! Options:
//!   --metric <filter>     Only benchmark metrics whose name contains <filter>
//!   --length <n>          Sequence length (default: 32)
//!   --iterations <n>      Calls per metric (default: 200)
//!   --config <file>       TOML file with metric options
//!   --unordered           Compare in unordered mode (ordered-only metrics fail)
//!   --json                Print one JSON object per result instead of a table
//!   --verbose             Extra debug output
//!   --help                Show this help message

use std::time::Instant;

use serde::Serialize;

use morphmetric_lib::{MetricConfig, MetricKind, Morph, MorphologicalMetric};

const DEFAULT_LENGTH: usize = 32;
const DEFAULT_ITERATIONS: u32 = 200;

/// Pitch range of the generated sequences
const PITCH_LOW: f64 = 48.0;
const PITCH_SPAN: u64 = 36;

const SEED_M: u64 = 0x5eed_0001;
const SEED_N: u64 = 0x5eed_0002;

// ═══════════════════════════════════════════════════════════════════════════════
// Result type
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct BenchmarkResult {
    metric: &'static str,
    value: Option<f64>,
    per_call_us: f64,
    error: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Help
// ═══════════════════════════════════════════════════════════════════════════════

fn print_help() {
    println!(
        "\n\
Morphmetric Benchmark

Times every metric of the suite over deterministic pseudo-random sequences.

USAGE:
    cargo run -p morphmetric-tools --bin metric_benchmark [-- [OPTIONS]]

OPTIONS:
    --metric <filter>   Only benchmark metrics whose name contains <filter>
    --length <n>        Sequence length (default: {DEFAULT_LENGTH})
    --iterations <n>    Calls per metric (default: {DEFAULT_ITERATIONS})
    --config <file>     TOML file with metric options
    --unordered         Compare in unordered mode
    --json              Print one JSON object per result
    --verbose           Extra debug output
    --help              Show this help message

EXAMPLES:
    cargo run -p morphmetric-tools --bin metric_benchmark
    cargo run -p morphmetric-tools --bin metric_benchmark -- --metric olm --length 128
    cargo run -p morphmetric-tools --bin metric_benchmark -- --config metrics.toml --json
"
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Argument parsing helpers
// ═══════════════════════════════════════════════════════════════════════════════

fn parse_arg_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<T>().ok())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Sequence generation
// ═══════════════════════════════════════════════════════════════════════════════

/// Integer pitches from a linear congruential generator, so runs are repeatable.
fn generate_sequence(len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            PITCH_LOW + ((state >> 33) % PITCH_SPAN) as f64
        })
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Entry point
// ═══════════════════════════════════════════════════════════════════════════════

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let verbose = args.iter().any(|a| a == "--verbose");
    let unordered = args.iter().any(|a| a == "--unordered");
    let json = args.iter().any(|a| a == "--json");
    let length = parse_arg_value::<usize>(&args, "--length").unwrap_or(DEFAULT_LENGTH).max(3);
    let iterations = parse_arg_value::<u32>(&args, "--iterations")
        .unwrap_or(DEFAULT_ITERATIONS)
        .max(1);
    let metric_filter = parse_arg_value::<String>(&args, "--metric");
    let config_path = parse_arg_value::<String>(&args, "--config");

    let log_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match config_path {
        Some(ref path) => {
            let contents = std::fs::read_to_string(path)?;
            MetricConfig::from_toml_str(&contents)?
        }
        None => MetricConfig::default(),
    };

    let m = Morph::new(generate_sequence(length, SEED_M))?;
    let n = Morph::new(generate_sequence(length, SEED_N))?;
    let metric = MorphologicalMetric::with_ordering(&m, &n, !unordered)?;

    let kinds: Vec<MetricKind> = MetricKind::ALL
        .into_iter()
        .filter(|kind| match metric_filter {
            Some(ref filter) => kind.as_str().contains(filter.as_str()),
            None => true,
        })
        .collect();

    if kinds.is_empty() {
        println!("  No metrics match the filter.");
        return Ok(());
    }

    if !json {
        println!("\n=== Morphmetric Benchmark ===\n");
        println!("  Length:     {}", length);
        println!("  Iterations: {}", iterations);
        println!("  Mode:       {}", if unordered { "unordered" } else { "ordered" });
        if let Some(ref path) = config_path {
            println!("  Config:     {}", path);
        }
        println!();
    }

    let mut results = Vec::with_capacity(kinds.len());
    for kind in kinds {
        log::debug!("Benchmarking {}", kind);
        let result = run_single(&metric, kind, &config, iterations);
        if json {
            println!("{}", serde_json::to_string(&result)?);
        }
        results.push(result);
    }

    if !json {
        print_summary(&results);
    }
    Ok(())
}

fn run_single(
    metric: &MorphologicalMetric<'_>,
    kind: MetricKind,
    config: &MetricConfig,
    iterations: u32,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut outcome = metric.evaluate(kind, config);
    for _ in 1..iterations {
        if outcome.is_err() {
            break;
        }
        outcome = metric.evaluate(kind, config);
    }
    let per_call_us = start.elapsed().as_secs_f64() * 1_000_000.0 / iterations as f64;

    match outcome {
        Ok(value) => BenchmarkResult {
            metric: kind.as_str(),
            value: Some(value),
            per_call_us,
            error: None,
        },
        Err(e) => BenchmarkResult {
            metric: kind.as_str(),
            value: None,
            per_call_us: 0.0,
            error: Some(e.to_string()),
        },
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Summary table
// ═══════════════════════════════════════════════════════════════════════════════

/// Room left for the error text in the merged 27-wide cell after "FAILED: "
const FAILURE_TEXT_WIDTH: usize = 19;

/// Cut `text` to at most `width` characters, ending in "..." when cut.
fn shorten(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

fn print_summary(results: &[BenchmarkResult]) {
    println!("  ╔══════════════════════════╤══════════════╤══════════════╗");
    println!("  ║ {:<24} │ {:>12} │ {:>12} ║", "Metric", "Value", "µs / call");
    println!("  ╠══════════════════════════╪══════════════╪══════════════╣");

    for r in results {
        match (&r.error, r.value) {
            (Some(err), _) => {
                let cell = format!("FAILED: {}", shorten(err, FAILURE_TEXT_WIDTH));
                println!("  ║ {:<24} │ {:>27} ║", r.metric, cell);
            }
            (None, Some(value)) => {
                println!(
                    "  ║ {:<24} │ {:>12.6} │ {:>12.2} ║",
                    r.metric, value, r.per_call_us
                );
            }
            (None, None) => {}
        }
    }

    println!("  ╚══════════════════════════╧══════════════╧══════════════╝");

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    println!("\n  {} metrics, {} failed\n", results.len(), failed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_cell_fits_the_table() {
        let err = MetricKind::Olm.as_str().repeat(20);
        let cell = format!("FAILED: {}", shorten(&err, FAILURE_TEXT_WIDTH));
        assert_eq!(cell.chars().count(), 27);
        assert!(cell.ends_with("..."));

        assert_eq!(shorten("short", FAILURE_TEXT_WIDTH), "short");
        assert_eq!(shorten("ordering violation: OCM", FAILURE_TEXT_WIDTH), "ordering violati...");
    }
}
