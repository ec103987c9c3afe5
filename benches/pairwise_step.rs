use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use particle_dynamics::field::PairwiseField;
use particle_dynamics::simulation::{SimulationConfig, SimulationState};

fn bench_pairwise_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_field");
    for n in [64usize, 256, 1024] {
        let xs: Vec<f64> = (0..n).map(|i| (i * 37 % 900) as f64).collect();
        let ys: Vec<f64> = (0..n).map(|i| (i * 91 % 900) as f64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| PairwiseField::compute(black_box(&xs), black_box(&ys), 1e-20))
        });
    }
    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for (name, config) in [
        ("gravity", SimulationConfig::gravity_preset()),
        ("lennard_jones", SimulationConfig::lennard_jones_preset()),
    ] {
        for n in [9usize, 300, 1000] {
            let config = config.with_particle_count(n);
            let mut rng = StdRng::seed_from_u64(1);
            let mut sim = match SimulationState::random(config, &mut rng) {
                Ok(sim) => sim,
                Err(err) => {
                    debug!("Skipping {} with {} particles: {}", name, n, err);
                    continue;
                }
            };
            group.bench_function(BenchmarkId::new(name, n), |b| {
                b.iter(|| {
                    sim.advance();
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_pairwise_field, bench_advance);
criterion_main!(benches);
