//! Sparse text-format classification example.
//!
//! Parses a small dataset from the `label [weight] index:value` text
//! format, trains a hinge-loss classifier, and reports its decisions.
//!
//! Run with:
//! ```bash
//! cargo run --example classify_sparse
//! ```

use std::io::Cursor;

use asgd_rs::data::read_dataset;
use asgd_rs::training::{accuracy, AsgdParams, AsgdTrainer, HingeLoss, Verbosity};

/// Positive examples live on features 0 and 1, negative ones on 2 and 3.
/// The third line carries an example weight of 2.
const DATA: &str = "\
# synthetic two-cluster data
1 0:1.5 1:0.8
1 0:0.9 1:1.2
1 2.0 0:1.1 1:0.7
1 0:1.3 1:1.0
-1 2:1.4 3:0.9
-1 2:0.8 3:1.1
-1 2:1.2 3:1.3
-1 0.5 2:1.0 3:0.6
";

fn main() {
    // =========================================================================
    // Parse
    // =========================================================================
    let dataset = read_dataset(Cursor::new(DATA), 4).expect("failed to parse dataset");
    println!("Parsed {} examples of dimension {}\n", dataset.len(), dataset.dimension());

    // =========================================================================
    // Train
    // =========================================================================
    let params = AsgdParams {
        epochs: 50,
        lambda: 0.01,
        verbosity: Verbosity::Silent,
        ..Default::default()
    };
    let trainer = AsgdTrainer::new(params);
    let predictor = trainer.train(&dataset, HingeLoss).expect("training failed");

    // =========================================================================
    // Evaluate
    // =========================================================================
    println!("=== Results ===");
    for (i, example) in dataset.iter().enumerate() {
        let score = predictor.predict(example.features());
        let decision = if score >= 0.0 { 1.0 } else { -1.0 };
        println!(
            "example {}: label {:>4}, score {:>8.4}, predicted {:>4}",
            i,
            example.label(),
            score,
            decision
        );
    }
    println!("\nTraining accuracy: {:.1}%", accuracy(&predictor, &dataset) * 100.0);
}
