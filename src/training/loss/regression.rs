//! Regression losses.

use super::Loss;

/// Squared error loss: `L(p, y) = (p - y)^2 / 2`.
///
/// The halved form keeps the derivative at `p - y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredLoss;

impl Loss for SquaredLoss {
    #[inline]
    fn evaluate(&self, prediction: f64, label: f64) -> f64 {
        let residual = prediction - label;
        0.5 * residual * residual
    }

    #[inline]
    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        prediction - label
    }

    fn name(&self) -> &'static str {
        "squared_error"
    }
}
