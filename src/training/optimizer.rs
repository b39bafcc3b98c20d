//! Averaged stochastic gradient descent over streams of examples.

use thiserror::Error;

use crate::data::{DataVector, ExampleStream};
use crate::predictor::LinearPredictor;
use crate::training::loss::Loss;

/// Errors from constructing an optimizer.
#[derive(Debug, Error, PartialEq)]
pub enum OptimizerError {
    /// The L2 regularization strength must be positive and finite.
    #[error("regularization parameter must be positive and finite, got {lambda}")]
    InvalidLambda { lambda: f64 },
}

/// Averaged SGD for L2-regularized linear prediction.
///
/// The optimizer maintains two predictors on one shared iteration
/// clock: the last SGD iterate and the running time-weighted average of
/// all iterates. The average is what [`predictor`](Self::predictor)
/// returns and is the one to deploy; it converges much more smoothly
/// than the raw iterate.
///
/// Regularization shrinkage is deferred. Instead of shrinking both
/// predictors on every example, [`update`](Self::update) applies one
/// multiplicative rescale at the end of each batch and corrects
/// intermediate margins for the pending factor. Batched and
/// one-example-at-a-time updates therefore produce the same trajectory
/// up to floating-point rounding, and a sparse example costs O(nnz)
/// instead of O(dimension).
#[derive(Debug, Clone)]
pub struct AsgdOptimizer<L> {
    loss: L,
    lambda: f64,
    total_iterations: u64,
    last: LinearPredictor,
    averaged: LinearPredictor,
}

impl<L: Loss> AsgdOptimizer<L> {
    /// Creates a zero-initialized optimizer.
    ///
    /// `lambda` must be positive and finite. The iteration clock starts
    /// at one so the step size `1 / (lambda * t)` is always defined.
    pub fn new(dimension: usize, loss: L, lambda: f64) -> Result<Self, OptimizerError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(OptimizerError::InvalidLambda { lambda });
        }
        Ok(Self {
            loss,
            lambda,
            total_iterations: 1,
            last: LinearPredictor::zeros(dimension),
            averaged: LinearPredictor::zeros(dimension),
        })
    }

    /// The averaged predictor.
    #[inline]
    pub fn predictor(&self) -> &LinearPredictor {
        &self.averaged
    }

    /// The last SGD iterate.
    #[inline]
    pub fn last_predictor(&self) -> &LinearPredictor {
        &self.last
    }

    /// Value of the iteration clock: one plus the number of examples
    /// consumed so far.
    #[inline]
    pub fn total_iterations(&self) -> u64 {
        self.total_iterations
    }

    /// The regularization strength.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// The loss in use.
    #[inline]
    pub fn loss(&self) -> &L {
        &self.loss
    }

    /// Zeroes both predictors and restarts the iteration clock.
    pub fn reset(&mut self) {
        self.last.reset();
        self.averaged.reset();
        self.total_iterations = 1;
    }

    /// Consumes every remaining example of `stream` as one batch.
    ///
    /// Gradient steps use the fixed step size `1 / (lambda * t0)` where
    /// `t0` is the clock value at batch entry; the per-example
    /// `(t - 1) / t` shrinkage is folded into a single `t0 / t1`
    /// rescale of both predictors after the loop. An empty batch
    /// leaves the whole state untouched.
    ///
    /// # Panics
    ///
    /// Panics if the stream yields fewer examples than
    /// [`remaining`](ExampleStream::remaining) promised, or if an
    /// example's dimension does not match the optimizer's.
    pub fn update<V, S>(&mut self, stream: &mut S)
    where
        V: DataVector,
        S: ExampleStream<V>,
    {
        let batch = stream.remaining() as u64;
        let t0 = self.total_iterations;
        let t1 = t0 + batch;
        debug_assert!(t0 >= 1, "iteration clock must stay at one or above");

        let eta = 1.0 / (self.lambda * t0 as f64);
        let sigma = (t1 as f64).ln() + 0.5 / t1 as f64;

        // Weight of the pre-batch last iterate in the new average,
        // grouped as two differences so an empty batch folds with a
        // weight of exactly zero.
        let history_weight =
            ((t1 as f64).ln() - (t0 as f64).ln()) + (0.5 / t1 as f64 - 0.5 / t0 as f64);
        self.averaged.add_scaled(&self.last, history_weight);

        for t in (t0 + 1)..=t1 {
            let example = match stream.next_example() {
                Some(example) => example,
                None => panic!(
                    "example stream ended after {} of {} promised examples",
                    t - t0 - 1,
                    batch
                ),
            };
            let features = example.features();
            assert_eq!(
                features.dimension(),
                self.last.dimension(),
                "example dimension does not match optimizer dimension"
            );

            // Correct the margin for shrinkage not yet applied to the
            // last iterate.
            let correction = t0 as f64 / (t - 1) as f64;
            let margin = correction * self.last.predict(features);
            let gradient = example.weight() * self.loss.derivative(margin, example.label());

            let step = -eta * gradient;
            features.add_to(self.last.weights_mut(), step);
            self.last.add_bias(step);

            let averaged_step = step * (sigma - (t as f64).ln() - 0.5 / t as f64);
            features.add_to(self.averaged.weights_mut(), averaged_step);
            self.averaged.add_bias(averaged_step);
        }

        self.total_iterations = t1;

        // The whole batch's deferred shrinkage, applied at once.
        let rescale = t0 as f64 / t1 as f64;
        self.last.scale(rescale);
        self.averaged.scale(rescale);
    }
}
