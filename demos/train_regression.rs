//! ASGD regression training example.
//!
//! Trains an averaged SGD linear model on synthetic dense data and
//! compares the learned coefficients against the generating ones.
//!
//! Run with:
//! ```bash
//! cargo run --example train_regression
//! ```

use rand::prelude::*;

use asgd_rs::data::{Dataset, DenseVector, Example};
use asgd_rs::predictor::LinearPredictor;
use asgd_rs::training::{mean_loss, AsgdParams, AsgdTrainer, SquaredLoss, Verbosity};

fn main() {
    // =========================================================================
    // Generate synthetic regression data: y = w . x + b + noise
    // =========================================================================
    let n_samples = 500;
    let true_weights = [0.8, -0.5, 0.25];
    let true_bias = 0.3;

    let mut rng = StdRng::seed_from_u64(42);
    let mut dataset = Dataset::new(true_weights.len());
    for _ in 0..n_samples {
        let values: Vec<f64> = (0..true_weights.len())
            .map(|_| rng.r#gen::<f64>() * 2.0 - 1.0)
            .collect();
        let mut label = true_bias;
        for (value, weight) in values.iter().zip(&true_weights) {
            label += value * weight;
        }
        label += rng.r#gen::<f64>() * 0.1 - 0.05;
        dataset
            .push(Example::new(DenseVector::from_vec(values), label))
            .unwrap();
    }

    // =========================================================================
    // Train
    // =========================================================================
    let params = AsgdParams {
        epochs: 30,
        lambda: 0.5,
        verbosity: Verbosity::Silent,
        ..Default::default()
    };

    println!("Training ASGD regression model...");
    println!("  Samples: {}", dataset.len());
    println!("  Epochs: {}", params.epochs);
    println!("  Lambda: {}\n", params.lambda);

    let trainer = AsgdTrainer::new(params);
    let predictor = trainer.train(&dataset, SquaredLoss).expect("training failed");

    // =========================================================================
    // Evaluate
    // =========================================================================
    let baseline = mean_loss(
        &LinearPredictor::zeros(dataset.dimension()),
        &dataset,
        &SquaredLoss,
    );
    let trained = mean_loss(&predictor, &dataset, &SquaredLoss);

    println!("=== Results ===");
    for (i, (learned, truth)) in predictor.weights().iter().zip(&true_weights).enumerate() {
        println!("w[{}]: learned {:>8.4}, true {:>8.4}", i, learned, truth);
    }
    println!("bias: learned {:>8.4}, true {:>8.4}", predictor.bias(), true_bias);
    println!("\nMean squared loss: {:.6} (zero predictor: {:.6})", trained, baseline);
    println!("\nNote: regularization shrinks the learned weights toward zero.");
}
