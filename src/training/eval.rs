//! Predictor evaluation over datasets.

use rayon::prelude::*;

use crate::data::{DataVector, Dataset};
use crate::predictor::LinearPredictor;
use crate::training::loss::Loss;

/// Weighted mean loss of a predictor over a dataset.
///
/// Every example contributes `weight * loss(prediction, label)` and
/// the total is normalized by the sum of weights. Returns zero for an
/// empty dataset or an all-zero weighting.
pub fn mean_loss<V, L>(predictor: &LinearPredictor, dataset: &Dataset<V>, loss: &L) -> f64
where
    V: DataVector + Sync,
    L: Loss + Sync,
{
    let (weighted_sum, weight_sum) = dataset
        .examples()
        .par_iter()
        .map(|example| {
            let prediction = predictor.predict(example.features());
            let value = loss.evaluate(prediction, example.label());
            (example.weight() * value, example.weight())
        })
        .reduce(|| (0.0, 0.0), |a, b| (a.0 + b.0, a.1 + b.1));

    if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        0.0
    }
}

/// Fraction of examples whose prediction sign matches a `{-1, +1}`
/// label. A prediction of exactly zero counts as wrong for either
/// label.
pub fn accuracy<V>(predictor: &LinearPredictor, dataset: &Dataset<V>) -> f64
where
    V: DataVector + Sync,
{
    if dataset.is_empty() {
        return 0.0;
    }
    let correct = dataset
        .examples()
        .par_iter()
        .filter(|example| predictor.predict(example.features()) * example.label() > 0.0)
        .count();
    correct as f64 / dataset.len() as f64
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::data::{DenseVector, Example};
    use crate::training::loss::SquaredLoss;

    #[test]
    fn mean_loss_weights_each_example() {
        // Identity predictor on one feature.
        let predictor = LinearPredictor::from_parts(vec![1.0], 0.0);
        let mut dataset = Dataset::new(1);
        // Residual 1 with weight 1, residual 2 with weight 3.
        dataset
            .push(Example::new(DenseVector::from_vec(vec![2.0]), 1.0))
            .unwrap();
        dataset
            .push(
                Example::with_weight(DenseVector::from_vec(vec![3.0]), 1.0, 3.0).unwrap(),
            )
            .unwrap();

        // (1 * 0.5 + 3 * 2.0) / 4
        assert_relative_eq!(mean_loss(&predictor, &dataset, &SquaredLoss), 1.625);
    }

    #[test]
    fn mean_loss_of_empty_dataset_is_zero() {
        let predictor = LinearPredictor::zeros(2);
        let dataset: Dataset<DenseVector> = Dataset::new(2);
        assert_relative_eq!(mean_loss(&predictor, &dataset, &SquaredLoss), 0.0);
    }

    #[test]
    fn mean_loss_with_all_zero_weights_is_zero() {
        let predictor = LinearPredictor::zeros(1);
        let mut dataset = Dataset::new(1);
        dataset
            .push(
                Example::with_weight(DenseVector::from_vec(vec![1.0]), 5.0, 0.0).unwrap(),
            )
            .unwrap();
        assert_relative_eq!(mean_loss(&predictor, &dataset, &SquaredLoss), 0.0);
    }

    #[test]
    fn accuracy_counts_sign_agreement() {
        let predictor = LinearPredictor::from_parts(vec![1.0], 0.0);
        let mut dataset = Dataset::new(1);
        for (x, label) in [(2.0, 1.0), (-1.0, -1.0), (3.0, -1.0), (-0.5, -1.0)] {
            dataset
                .push(Example::new(DenseVector::from_vec(vec![x]), label))
                .unwrap();
        }
        assert_relative_eq!(accuracy(&predictor, &dataset), 0.75);
    }

    #[test]
    fn accuracy_of_empty_dataset_is_zero() {
        let predictor = LinearPredictor::zeros(1);
        let dataset: Dataset<DenseVector> = Dataset::new(1);
        assert_relative_eq!(accuracy(&predictor, &dataset), 0.0);
    }
}
