//! Benchmarks for full elimination runs.
//!
//! # Benchmarks
//!
//! - **`run_unbounded`**: Runs to completion while snapshotting every round.
//! - **`run_without_history`**: Same run with history disabled, isolating the
//!   cost of the snapshot copies.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench simulation
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use josephus_game::{EliminationSimulator, HistoryPolicy, SimulatorOptions};

const CASES: [(usize, usize); 3] = [(41, 3), (500, 7), (2000, 2)];

fn bench_run(c: &mut Criterion, name: &str, policy: HistoryPolicy) {
    let options = SimulatorOptions::default().history_policy(policy);
    for (count, step) in CASES {
        c.bench_with_input(
            BenchmarkId::new(name, format!("n{count}_k{step}")),
            &(count, step),
            |b, &(count, step)| {
                b.iter_batched(
                    || EliminationSimulator::with_options(count, step, &options).unwrap(),
                    |mut sim| hint::black_box(sim.run_to_end()),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_run_unbounded(c: &mut Criterion) {
    bench_run(c, "run_unbounded", HistoryPolicy::Unbounded);
}

fn bench_run_without_history(c: &mut Criterion) {
    bench_run(c, "run_without_history", HistoryPolicy::Disabled);
}

criterion_group!(benches, bench_run_unbounded, bench_run_without_history);
criterion_main!(benches);
