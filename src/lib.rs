//! asgd-rs: averaged stochastic gradient descent for linear predictors.
//!
//! Trains L2-regularized linear models with iterate averaging. The
//! optimizer maintains the usual SGD iterate alongside the
//! time-weighted average of all iterates, which converges much more
//! smoothly and is the predictor to deploy. Regularization shrinkage is
//! applied lazily once per batch, so a sparse example costs O(nnz) per
//! step instead of O(dimension).
//!
//! # Example
//!
//! ```
//! use asgd_rs::data::{Dataset, DenseVector, Example};
//! use asgd_rs::training::{AsgdParams, AsgdTrainer, SquaredLoss, Verbosity};
//!
//! let mut dataset = Dataset::new(1);
//! for (x, y) in [(1.0, 3.0), (2.0, 5.0), (3.0, 7.0)] {
//!     dataset.push(Example::new(DenseVector::from_vec(vec![x]), y))?;
//! }
//!
//! let trainer = AsgdTrainer::new(AsgdParams {
//!     epochs: 50,
//!     lambda: 1.0,
//!     verbosity: Verbosity::Silent,
//!     ..Default::default()
//! });
//! let predictor = trainer.train(&dataset, SquaredLoss)?;
//! assert_eq!(predictor.dimension(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod data;
pub mod predictor;
pub mod training;
