use serde::{Deserialize, Serialize};

/// Progress report emitted by `train_until_converged` every
/// `TrainConfig::report_every` epochs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Largest absolute per-sample error seen during this epoch.
    pub max_error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

/// Final state of a convergence run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainOutcome {
    /// Number of completed epochs.
    pub epochs: usize,
    /// Error of the last completed epoch.
    pub max_error: f64,
    /// Whether the last epoch reached `error_threshold`.
    pub converged: bool,
}
