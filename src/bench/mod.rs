//! Micro-benchmarks for `Result` pipelines
//!
//! Timings are wall-clock and only meaningful relative to each other.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::hint::black_box;
use std::panic;
use std::time::Instant;
use tracing::debug;

use crate::config::BenchConfig;
use crate::demo::divide;
use crate::{make_err, make_ok};

/// Timing of one benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub name: String,
    pub iterations: u64,
    pub total_micros: u64,
    pub per_op_micros: f64,
    pub started_at: DateTime<Utc>,
}

impl BenchReport {
    fn finish(name: &str, iterations: u64, started_at: DateTime<Utc>, start: Instant) -> Self {
        let total_micros = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        let per_op_micros = if iterations == 0 {
            0.0
        } else {
            total_micros as f64 / iterations as f64
        };
        debug!(name, iterations, total_micros, "benchmark finished");

        Self {
            name: name.to_string(),
            iterations,
            total_micros,
            per_op_micros,
            started_at,
        }
    }
}

/// Construct an `Ok` and unwrap it.
pub fn bench_basic(iterations: u64) -> BenchReport {
    let started_at = Utc::now();
    let start = Instant::now();

    let mut sink = 0u64;
    for i in 0..iterations {
        let result = make_ok::<u64, String>(black_box(i));
        if result.is_ok() {
            sink = sink.wrapping_add(result.unwrap());
        }
    }
    black_box(sink);

    BenchReport::finish("basic_operations", iterations, started_at, start)
}

/// `and_then`, `map` and a failing `and_then` folded with `unwrap_or`.
pub fn bench_chaining(iterations: u64) -> BenchReport {
    let started_at = Utc::now();
    let start = Instant::now();

    let mut sink = 0u64;
    for i in 0..iterations {
        let value = make_ok::<u64, String>(black_box(i % 100))
            .and_then(|x| make_ok(x * 2))
            .map(|x| x + 1)
            .and_then(|x| {
                if x > 150 {
                    make_err("too big".to_string())
                } else {
                    make_ok(x)
                }
            })
            .unwrap_or(0);
        sink = sink.wrapping_add(value);
    }
    black_box(sink);

    BenchReport::finish("chaining_operations", iterations, started_at, start)
}

/// Every tenth division fails. Compares `unwrap_or` on a `Result` against
/// catching an unwinding panic.
pub fn bench_vs_unwind(iterations: u64) -> (BenchReport, BenchReport) {
    let divisor = |i: u64| if i % 10 == 0 { 0 } else { 1 };

    let started_at = Utc::now();
    let start = Instant::now();
    let mut sink = 0i64;
    for i in 0..iterations {
        let quotient = divide(black_box(i as i64), divisor(i)).unwrap_or(-1);
        sink = sink.wrapping_add(quotient);
    }
    black_box(sink);
    let result_report = BenchReport::finish("result_division", iterations, started_at, start);

    // Silence the default hook so every caught panic is not printed.
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));

    let started_at = Utc::now();
    let start = Instant::now();
    let mut sink = 0i64;
    for i in 0..iterations {
        let (a, b) = (black_box(i as i64), divisor(i));
        let quotient = panic::catch_unwind(move || {
            if b == 0 {
                panic!("div by zero");
            }
            a / b
        })
        .unwrap_or(-1);
        sink = sink.wrapping_add(quotient);
    }
    black_box(sink);
    let unwind_report = BenchReport::finish("unwind_division", iterations, started_at, start);

    panic::set_hook(previous_hook);

    (result_report, unwind_report)
}

/// Run every benchmark with the configured iteration counts.
pub fn run_all(config: &BenchConfig) -> Vec<BenchReport> {
    let (result_report, unwind_report) = bench_vs_unwind(config.compare_iterations);
    vec![
        bench_basic(config.basic_iterations),
        bench_chaining(config.chain_iterations),
        result_report,
        unwind_report,
    ]
}
