//! Loss functions for training linear predictors.
//!
//! All losses are pointwise: they score one prediction against one
//! label. The optimizer only needs [`derivative`](Loss::derivative);
//! [`evaluate`](Loss::evaluate) exists for progress reporting and
//! model evaluation.

mod classification;
mod regression;

pub use classification::{HingeLoss, LogisticLoss};
pub use regression::SquaredLoss;

/// A pointwise training loss.
///
/// Implementations are stateless and cheap to copy. The derivative is
/// taken with respect to the prediction.
pub trait Loss {
    /// Loss value at a prediction for a label.
    fn evaluate(&self, prediction: f64, label: f64) -> f64;

    /// Derivative of the loss with respect to the prediction.
    ///
    /// For losses with kinks this is a subgradient.
    fn derivative(&self, prediction: f64, label: f64) -> f64;

    /// Short stable identifier used in training logs.
    fn name(&self) -> &'static str;
}

/// Loss selection by value, for configuration code that picks a loss
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LossKind {
    /// [`SquaredLoss`], for regression.
    #[default]
    SquaredError,
    /// [`LogisticLoss`], for binary classification.
    Logistic,
    /// [`HingeLoss`], for binary classification.
    Hinge,
}

impl Loss for LossKind {
    fn evaluate(&self, prediction: f64, label: f64) -> f64 {
        match self {
            LossKind::SquaredError => SquaredLoss.evaluate(prediction, label),
            LossKind::Logistic => LogisticLoss.evaluate(prediction, label),
            LossKind::Hinge => HingeLoss.evaluate(prediction, label),
        }
    }

    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        match self {
            LossKind::SquaredError => SquaredLoss.derivative(prediction, label),
            LossKind::Logistic => LogisticLoss.derivative(prediction, label),
            LossKind::Hinge => HingeLoss.derivative(prediction, label),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            LossKind::SquaredError => SquaredLoss.name(),
            LossKind::Logistic => LogisticLoss.name(),
            LossKind::Hinge => HingeLoss.name(),
        }
    }
}
