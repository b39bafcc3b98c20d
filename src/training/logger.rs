//! Training progress logging.

use std::time::Instant;

/// How much the training loop prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// No output.
    Silent,
    /// Warnings only.
    Warning,
    /// Per-epoch progress.
    #[default]
    Info,
    /// Everything, including per-batch details.
    Debug,
}

/// Console logger for training runs.
///
/// Every method is gated on the configured [`Verbosity`], so a silent
/// logger costs nothing beyond the call.
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    epochs: usize,
    started: Option<Instant>,
}

impl TrainingLogger {
    /// Creates a logger with the given verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            epochs: 0,
            started: None,
        }
    }

    /// Marks the start of a run of `epochs` epochs over `examples`
    /// examples.
    pub fn start_training(&mut self, epochs: usize, examples: usize) {
        self.epochs = epochs;
        self.started = Some(Instant::now());
        if self.verbosity >= Verbosity::Info {
            println!("training for {} epochs over {} examples", epochs, examples);
        }
    }

    /// Logs one epoch's mean training loss.
    pub fn log_epoch(&mut self, epoch: usize, loss_name: &str, loss_value: f64) {
        if self.verbosity >= Verbosity::Info {
            println!(
                "[{:>4}/{}] {}: {:.6}",
                epoch + 1,
                self.epochs,
                loss_name,
                loss_value
            );
        }
    }

    /// Logs the total elapsed time.
    pub fn finish_training(&mut self) {
        if self.verbosity >= Verbosity::Info {
            if let Some(started) = self.started {
                println!("training finished in {:.2?}", started.elapsed());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels_are_ordered() {
        assert!(Verbosity::Silent < Verbosity::Warning);
        assert!(Verbosity::Warning < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
        assert_eq!(Verbosity::default(), Verbosity::Info);
    }

    #[test]
    fn silent_logger_runs_through_a_full_cycle() {
        let mut logger = TrainingLogger::new(Verbosity::Silent);
        logger.start_training(3, 100);
        logger.log_epoch(0, "squared_error", 1.0);
        logger.finish_training();
    }
}
