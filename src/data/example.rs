//! Weighted, labeled training examples.

use std::fmt;

use thiserror::Error;

use crate::data::vector::DataVector;

/// Errors from constructing a training example.
#[derive(Debug, Error, PartialEq)]
pub enum ExampleError {
    /// Example weights must be non-negative and finite.
    #[error("example weight must be a non-negative finite number, got {weight}")]
    InvalidWeight { weight: f64 },
}

/// A labeled feature vector with a non-negative importance weight.
///
/// The weight scales the example's contribution to the loss gradient. A
/// zero-weight example contributes no gradient but still advances the
/// optimizer's iteration clock.
#[derive(Debug, Clone)]
pub struct Example<V> {
    features: V,
    label: f64,
    weight: f64,
}

impl<V: DataVector> Example<V> {
    /// Creates an example with unit weight.
    pub fn new(features: V, label: f64) -> Self {
        Self {
            features,
            label,
            weight: 1.0,
        }
    }

    /// Creates an example with an explicit importance weight.
    pub fn with_weight(features: V, label: f64, weight: f64) -> Result<Self, ExampleError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ExampleError::InvalidWeight { weight });
        }
        Ok(Self {
            features,
            label,
            weight,
        })
    }

    /// The feature vector.
    #[inline]
    pub fn features(&self) -> &V {
        &self.features
    }

    /// The target label.
    #[inline]
    pub fn label(&self) -> f64 {
        self.label
    }

    /// The importance weight.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl<V: DataVector> fmt::Display for Example<V> {
    /// Formats as `label [weight] index:value ...`, the same line shape
    /// the text reader accepts. The weight is omitted when it is one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if self.weight != 1.0 {
            write!(f, " {}", self.weight)?;
        }
        for (index, value) in self.features.nonzeros() {
            write!(f, " {}:{}", index, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vector::{DenseVector, SparseVector};

    #[test]
    fn new_defaults_to_unit_weight() {
        let example = Example::new(DenseVector::from_vec(vec![1.0, 2.0]), -1.0);
        assert_eq!(example.label(), -1.0);
        assert_eq!(example.weight(), 1.0);
        assert_eq!(example.features().as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn with_weight_accepts_zero() {
        let example =
            Example::with_weight(DenseVector::from_vec(vec![1.0]), 1.0, 0.0).unwrap();
        assert_eq!(example.weight(), 0.0);
    }

    #[test]
    fn with_weight_rejects_negative_and_non_finite() {
        let err = Example::with_weight(DenseVector::from_vec(vec![1.0]), 1.0, -0.5).unwrap_err();
        assert_eq!(err, ExampleError::InvalidWeight { weight: -0.5 });

        assert!(Example::with_weight(DenseVector::from_vec(vec![1.0]), 1.0, f64::NAN).is_err());
        assert!(
            Example::with_weight(DenseVector::from_vec(vec![1.0]), 1.0, f64::INFINITY).is_err()
        );
    }

    #[test]
    fn display_matches_reader_format() {
        let sparse = SparseVector::from_pairs(5, &[(0, 2.0), (3, 0.5)]).unwrap();
        let example = Example::new(sparse, 1.0);
        assert_eq!(example.to_string(), "1 0:2 3:0.5");
    }

    #[test]
    fn display_includes_non_unit_weight() {
        let sparse = SparseVector::from_pairs(4, &[(1, 1.0)]).unwrap();
        let example = Example::with_weight(sparse, -1.0, 0.5).unwrap();
        assert_eq!(example.to_string(), "-1 0.5 1:1");
    }
}
