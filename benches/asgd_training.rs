//! ASGD training benchmarks for asgd-rs.
//!
//! Benchmarks cover:
//! - Dense vs sparse feature vectors for optimizer updates
//! - Different dataset sizes
//! - Feature count scaling
//! - Multi-epoch training through the trainer
//! - Sequential vs parallel batch prediction
//!
//! # Running benchmarks
//!
//! ```bash
//! cargo bench --bench asgd_training
//! ```
//!
//! # Results
//!
//! HTML reports are generated in `target/criterion/`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;

use asgd_rs::data::{Dataset, DatasetStream, DenseVector, Example, SparseVector};
use asgd_rs::predictor::LinearPredictor;
use asgd_rs::training::{AsgdOptimizer, AsgdParams, AsgdTrainer, SquaredLoss, Verbosity};

// =============================================================================
// Benchmark Data Setup
// =============================================================================

/// Generate random dense examples.
///
/// Labels are a simple linear function of the features plus noise.
fn generate_dense_examples(
    num_rows: usize,
    num_features: usize,
    seed: u64,
) -> Vec<Example<DenseVector>> {
    let mut rng = StdRng::seed_from_u64(seed);

    let true_weights: Vec<f64> =
        (0..num_features).map(|_| rng.r#gen::<f64>() * 2.0 - 1.0).collect();
    let true_bias: f64 = rng.r#gen::<f64>() * 0.5;

    (0..num_rows)
        .map(|_| {
            let values: Vec<f64> =
                (0..num_features).map(|_| rng.r#gen::<f64>() * 2.0 - 1.0).collect();
            let mut label = true_bias;
            for (value, weight) in values.iter().zip(&true_weights) {
                label += value * weight;
            }
            label += rng.r#gen::<f64>() * 0.1 - 0.05;
            Example::new(DenseVector::from_vec(values), label)
        })
        .collect()
}

/// Generate random sparse examples with a fixed number of nonzeros each.
fn generate_sparse_examples(
    num_rows: usize,
    dimension: usize,
    nonzeros: usize,
    seed: u64,
) -> Vec<Example<SparseVector>> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..num_rows)
        .map(|_| {
            let mut indices = rand::seq::index::sample(&mut rng, dimension, nonzeros).into_vec();
            indices.sort_unstable();
            let pairs: Vec<(u32, f64)> = indices
                .into_iter()
                .map(|index| (index as u32, rng.r#gen::<f64>() * 2.0 - 1.0))
                .collect();
            let label = if rng.r#gen::<f64>() < 0.5 { -1.0 } else { 1.0 };
            Example::new(SparseVector::from_pairs(dimension, &pairs).unwrap(), label)
        })
        .collect()
}

// =============================================================================
// Optimizer Update Benchmarks
// =============================================================================

/// Benchmark one optimizer batch over dense examples.
fn bench_update_dense(c: &mut Criterion) {
    let num_features = 100;

    let mut group = c.benchmark_group("update_dense");

    for num_rows in [1_000, 10_000] {
        let examples = generate_dense_examples(num_rows, num_features, 42);

        group.throughput(Throughput::Elements((num_rows * num_features) as u64));

        group.bench_with_input(
            BenchmarkId::new("dense", num_rows),
            &examples,
            |b, examples| {
                b.iter(|| {
                    let mut optimizer = AsgdOptimizer::new(num_features, SquaredLoss, 1.0).unwrap();
                    optimizer.update(&mut DatasetStream::new(black_box(examples)));
                    black_box(optimizer.predictor().bias())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark one optimizer batch over sparse examples.
///
/// The dimension is large and each example touches only a few entries,
/// so update cost should track the nonzero count rather than the
/// dimension.
fn bench_update_sparse(c: &mut Criterion) {
    let dimension = 10_000;
    let nonzeros = 20;

    let mut group = c.benchmark_group("update_sparse");

    for num_rows in [1_000, 10_000] {
        let examples = generate_sparse_examples(num_rows, dimension, nonzeros, 42);

        group.throughput(Throughput::Elements((num_rows * nonzeros) as u64));

        group.bench_with_input(
            BenchmarkId::new("sparse", num_rows),
            &examples,
            |b, examples| {
                b.iter(|| {
                    let mut optimizer = AsgdOptimizer::new(dimension, SquaredLoss, 1.0).unwrap();
                    optimizer.update(&mut DatasetStream::new(black_box(examples)));
                    black_box(optimizer.predictor().bias())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Feature Count Scaling Benchmarks
// =============================================================================

/// Benchmark how dense update time scales with the number of features.
fn bench_feature_scaling(c: &mut Criterion) {
    let num_rows = 1_000;

    let mut group = c.benchmark_group("feature_scaling");

    for num_features in [10, 100, 1_000] {
        let examples = generate_dense_examples(num_rows, num_features, 42);

        group.throughput(Throughput::Elements((num_rows * num_features) as u64));

        group.bench_with_input(
            BenchmarkId::new("features", num_features),
            &examples,
            |b, examples| {
                b.iter(|| {
                    let mut optimizer = AsgdOptimizer::new(num_features, SquaredLoss, 1.0).unwrap();
                    optimizer.update(&mut DatasetStream::new(black_box(examples)));
                    black_box(optimizer.predictor().bias())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Trainer Benchmarks
// =============================================================================

/// Benchmark full multi-epoch training with shuffling.
fn bench_epoch_training(c: &mut Criterion) {
    let num_features = 100;
    let params = AsgdParams {
        epochs: 10,
        lambda: 1.0,
        verbosity: Verbosity::Silent,
        ..Default::default()
    };

    let mut group = c.benchmark_group("epoch_training");

    for num_rows in [1_000, 10_000] {
        let examples = generate_dense_examples(num_rows, num_features, 42);
        let dataset = Dataset::from_examples(num_features, examples).unwrap();

        group.throughput(Throughput::Elements((num_rows * params.epochs) as u64));

        group.bench_with_input(
            BenchmarkId::new("epochs", num_rows),
            &dataset,
            |b, dataset| {
                let trainer = AsgdTrainer::new(params.clone());
                b.iter(|| {
                    let predictor = trainer.train(black_box(dataset), SquaredLoss).unwrap();
                    black_box(predictor)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Prediction Benchmarks
// =============================================================================

/// Benchmark sequential vs parallel batch prediction.
fn bench_prediction(c: &mut Criterion) {
    let num_features = 100;
    let num_rows = 10_000;
    let examples = generate_dense_examples(num_rows, num_features, 42);
    let dataset = Dataset::from_examples(num_features, examples).unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let weights: Vec<f64> = (0..num_features).map(|_| rng.r#gen::<f64>() * 2.0 - 1.0).collect();
    let predictor = LinearPredictor::from_parts(weights, 0.25);

    let mut group = c.benchmark_group("prediction");
    group.throughput(Throughput::Elements(num_rows as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let outputs = predictor.predict_batch(black_box(&dataset));
            black_box(outputs)
        });
    });

    group.bench_function("parallel", |b| {
        b.iter(|| {
            let outputs = predictor.par_predict_batch(black_box(&dataset));
            black_box(outputs)
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_update_dense,
    bench_update_sparse,
    bench_feature_scaling,
    bench_epoch_training,
    bench_prediction,
);

criterion_main!(benches);
