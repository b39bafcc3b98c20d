//! Training: losses, the ASGD optimizer, and the epoch driver.

pub mod eval;
pub mod logger;
pub mod loss;
pub mod optimizer;
pub mod trainer;

pub use eval::{accuracy, mean_loss};
pub use logger::{TrainingLogger, Verbosity};
pub use loss::{HingeLoss, LogisticLoss, Loss, LossKind, SquaredLoss};
pub use optimizer::{AsgdOptimizer, OptimizerError};
pub use trainer::{AsgdParams, AsgdTrainer, TrainError};
