//! Linear predictor storage and inference.

use rayon::prelude::*;

use crate::data::{DataVector, Dataset};

/// A linear predictor `f(x) = w . x + b`.
///
/// Training maintains two of these on a shared iteration clock, the
/// last SGD iterate and the averaged iterate. Inference only needs the
/// one the trainer returns.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPredictor {
    weights: Vec<f64>,
    bias: f64,
}

impl LinearPredictor {
    /// Creates a zero predictor of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            weights: vec![0.0; dimension],
            bias: 0.0,
        }
    }

    /// Creates a predictor from explicit weights and bias.
    pub fn from_parts(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Number of features.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// The weight vector.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Mutable access to the weight vector.
    #[inline]
    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// The bias term.
    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Adds `delta` to the bias term.
    #[inline]
    pub fn add_bias(&mut self, delta: f64) {
        self.bias += delta;
    }

    /// Scores a single feature vector.
    pub fn predict<V: DataVector>(&self, features: &V) -> f64 {
        debug_assert_eq!(
            features.dimension(),
            self.weights.len(),
            "feature dimension does not match predictor dimension"
        );
        features.dot(&self.weights) + self.bias
    }

    /// Multiplies every weight and the bias by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for weight in &mut self.weights {
            *weight *= factor;
        }
        self.bias *= factor;
    }

    /// Adds `factor * other` into `self`, bias included.
    pub fn add_scaled(&mut self, other: &LinearPredictor, factor: f64) {
        debug_assert_eq!(
            self.weights.len(),
            other.weights.len(),
            "predictor dimensions do not match"
        );
        for (weight, source) in self.weights.iter_mut().zip(&other.weights) {
            *weight += factor * source;
        }
        self.bias += factor * other.bias;
    }

    /// Resets every weight and the bias to zero.
    pub fn reset(&mut self) {
        self.weights.fill(0.0);
        self.bias = 0.0;
    }

    /// Scores every example of a dataset sequentially.
    pub fn predict_batch<V: DataVector>(&self, dataset: &Dataset<V>) -> Vec<f64> {
        dataset
            .iter()
            .map(|example| self.predict(example.features()))
            .collect()
    }

    /// Scores every example of a dataset in parallel.
    pub fn par_predict_batch<V>(&self, dataset: &Dataset<V>) -> Vec<f64>
    where
        V: DataVector + Sync,
    {
        dataset
            .examples()
            .par_iter()
            .map(|example| self.predict(example.features()))
            .collect()
    }
}
