//! Binary classification losses over `{-1, +1}` labels.
//!
//! Both losses work on the margin `y * p`. Positive margins mean the
//! prediction agrees with the label.

use super::Loss;

/// Logistic loss: `L(p, y) = ln(1 + e^(-y p))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogisticLoss;

impl Loss for LogisticLoss {
    fn evaluate(&self, prediction: f64, label: f64) -> f64 {
        debug_assert!(
            label == 1.0 || label == -1.0,
            "logistic labels must be -1 or +1, got {}",
            label
        );
        let margin = label * prediction;
        // Branch on the margin sign so the exponent never overflows.
        if margin >= 0.0 {
            (-margin).exp().ln_1p()
        } else {
            -margin + margin.exp().ln_1p()
        }
    }

    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        debug_assert!(
            label == 1.0 || label == -1.0,
            "logistic labels must be -1 or +1, got {}",
            label
        );
        -label / (1.0 + (label * prediction).exp())
    }

    fn name(&self) -> &'static str {
        "logistic"
    }
}

/// Hinge loss: `L(p, y) = max(0, 1 - y p)`.
///
/// The derivative is the subgradient that is `-y` inside the margin
/// and zero outside; the kink at `y p = 1` takes the zero branch.
#[derive(Debug, Clone, Copy, Default)]
pub struct HingeLoss;

impl Loss for HingeLoss {
    #[inline]
    fn evaluate(&self, prediction: f64, label: f64) -> f64 {
        debug_assert!(
            label == 1.0 || label == -1.0,
            "hinge labels must be -1 or +1, got {}",
            label
        );
        (1.0 - label * prediction).max(0.0)
    }

    #[inline]
    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        debug_assert!(
            label == 1.0 || label == -1.0,
            "hinge labels must be -1 or +1, got {}",
            label
        );
        if label * prediction < 1.0 {
            -label
        } else {
            0.0
        }
    }

    fn name(&self) -> &'static str {
        "hinge"
    }
}
