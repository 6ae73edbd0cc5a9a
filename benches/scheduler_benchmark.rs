/*!
 * Scheduler Benchmarks
 *
 * Measures simulation cost per algorithm as the workload grows.
 */

use cpu_sched_sim::{Algorithm, Engine, ProcessSpec, SimulationConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn workload(size: usize) -> Vec<ProcessSpec> {
    (0..size)
        .map(|i| {
            ProcessSpec::new(format!("P{i}"), (i / 3) as f64, (1 + i % 7) as f64)
                .with_priority((i % 5) as f64)
        })
        .collect()
}

/// Benchmark: every algorithm across workload sizes
fn bench_algorithms(c: &mut Criterion) {
    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("simulate/{}", algorithm.as_str()));
        let engine = Engine::new(SimulationConfig::new(algorithm));

        for size in [10, 100, 500] {
            let processes = workload(size);
            group.bench_with_input(BenchmarkId::from_parameter(size), &processes, |b, p| {
                b.iter(|| black_box(engine.simulate(black_box(p))))
            });
        }
        group.finish();
    }
}

/// Benchmark: Round Robin sensitivity to the quantum
fn bench_round_robin_quantum(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_robin/quantum");
    let processes = workload(200);

    for quantum in [1.0, 2.0, 4.0, 8.0] {
        let engine = Engine::new(
            SimulationConfig::new(Algorithm::RoundRobin)
                .with_quantum(quantum)
                .expect("valid quantum"),
        );
        group.bench_with_input(BenchmarkId::from_parameter(quantum), &processes, |b, p| {
            b.iter(|| black_box(engine.simulate(black_box(p))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_round_robin_quantum);
criterion_main!(benches);
