//! Multi-epoch training driver.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use thiserror::Error;

use crate::data::{DataVector, Dataset, PermutedStream};
use crate::predictor::LinearPredictor;
use crate::training::eval::mean_loss;
use crate::training::logger::{TrainingLogger, Verbosity};
use crate::training::loss::Loss;
use crate::training::optimizer::{AsgdOptimizer, OptimizerError};

/// Errors from training.
#[derive(Debug, Error, PartialEq)]
pub enum TrainError {
    /// Training needs at least one example.
    #[error("cannot train on an empty dataset")]
    EmptyDataset,
    #[error(transparent)]
    Optimizer(#[from] OptimizerError),
}

/// Configuration for [`AsgdTrainer`].
#[derive(Debug, Clone)]
pub struct AsgdParams {
    /// Number of passes over the dataset.
    pub epochs: usize,
    /// L2 regularization strength, must be positive and finite.
    pub lambda: f64,
    /// Whether to reshuffle the visit order before every epoch.
    pub shuffle: bool,
    /// Seed for the shuffling RNG.
    pub seed: u64,
    /// Logging verbosity.
    pub verbosity: Verbosity,
}

impl Default for AsgdParams {
    fn default() -> Self {
        Self {
            epochs: 10,
            lambda: 1e-4,
            shuffle: true,
            seed: 42,
            verbosity: Verbosity::Info,
        }
    }
}

/// Trains a linear predictor by running the optimizer over a dataset
/// for a fixed number of epochs.
///
/// Each epoch is one optimizer batch covering the whole dataset, in
/// shuffled order when [`AsgdParams::shuffle`] is set. The same seed
/// over the same dataset reproduces the same predictor exactly.
#[derive(Debug, Clone)]
pub struct AsgdTrainer {
    params: AsgdParams,
}

impl AsgdTrainer {
    /// Creates a trainer with the given parameters.
    pub fn new(params: AsgdParams) -> Self {
        Self { params }
    }

    /// The trainer's parameters.
    pub fn params(&self) -> &AsgdParams {
        &self.params
    }

    /// Trains on `dataset` and returns the averaged predictor.
    pub fn train<V, L>(&self, dataset: &Dataset<V>, loss: L) -> Result<LinearPredictor, TrainError>
    where
        V: DataVector + Sync,
        L: Loss + Sync,
    {
        if dataset.is_empty() {
            return Err(TrainError::EmptyDataset);
        }

        let mut optimizer = AsgdOptimizer::new(dataset.dimension(), loss, self.params.lambda)?;
        let mut logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(self.params.epochs, dataset.len());

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.params.seed);
        let mut order: Vec<usize> = (0..dataset.len()).collect();

        for epoch in 0..self.params.epochs {
            if self.params.shuffle {
                order.shuffle(&mut rng);
            }
            let mut stream = PermutedStream::new(dataset.examples(), &order);
            optimizer.update(&mut stream);

            // Evaluation costs a full pass, so skip it unless it will
            // be printed.
            if self.params.verbosity >= Verbosity::Info {
                let loss_value = mean_loss(optimizer.predictor(), dataset, optimizer.loss());
                logger.log_epoch(epoch, optimizer.loss().name(), loss_value);
            }
        }

        logger.finish_training();
        Ok(optimizer.predictor().clone())
    }
}
