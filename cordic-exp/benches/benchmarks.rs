#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use ndarray::Array1;
use rand::Rng;

use cordic_exp::{approximate_exp, compute_exp, BitWidth, CordicVariant, Engine, ErrorMode};

// sizes
const NUM_SMALL: usize = 64;
const NUM_LARGE: usize = 16_384;

fn random_arguments(n: usize) -> Array1<f64> {
    let mut rnd = rand::thread_rng();
    // keep inside the hyperbolic convergence region
    (0..n).map(|_| rnd.gen_range(-1.0, 1.0)).collect()
}

fn bench_engines(crit: &mut Criterion) {
    let small = random_arguments(NUM_SMALL);
    let large = random_arguments(NUM_LARGE);

    for &width in &[BitWidth::W16, BitWidth::W32] {
        crit.bench_function(&format!("conventional-{}-small", width), |b| {
            b.iter(|| compute_exp(black_box(&small), width, Engine::Conventional, false))
        });
        crit.bench_function(&format!("pipelined-{}-small", width), |b| {
            b.iter(|| compute_exp(black_box(&small), width, Engine::Pipelined, false))
        });
    }

    // above the parallel threshold
    crit.bench_function("conventional-32-bit-large", |b| {
        b.iter(|| compute_exp(black_box(&large), BitWidth::W32, Engine::Conventional, false))
    });
    crit.bench_function("pipelined-32-bit-large", |b| {
        b.iter(|| compute_exp(black_box(&large), BitWidth::W32, Engine::Pipelined, false))
    });

    // baselines
    crit.bench_function("exact-large", |b| {
        b.iter(|| large.mapv(f64::exp))
    });
    crit.bench_function("bias-lookup-large", |b| {
        b.iter(|| {
            approximate_exp(
                black_box(&large),
                BitWidth::W32,
                ErrorMode::Average,
                CordicVariant::Pipelined,
                false,
            )
        })
    });
}

// long form, with samples specified
criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_engines
}

criterion_main!(benches);
