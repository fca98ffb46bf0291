use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::train::epoch_stats::EpochStats;

/// Hyperparameters for `train_until_converged`.
///
/// # Fields
/// - `learning_rate`   — step size of the delta rule
/// - `momentum`        — fraction of the previous weight update carried over
/// - `error_threshold` — training stops once an epoch's largest absolute
///                       error is at or below this value
/// - `max_epochs`      — optional hard cap; `None` trains until convergence
/// - `report_every`    — epochs between progress reports (0 disables them)
/// - `progress_tx`     — optional channel receiving an `EpochStats` on every
///                       report. If the receiver is dropped the loop stops.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub momentum: f64,
    pub error_threshold: f64,
    pub max_epochs: Option<usize>,
    pub report_every: usize,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.2,
            momentum: 0.1,
            error_threshold: 0.09,
            max_epochs: None,
            report_every: 1000,
            progress_tx: None,
        }
    }
}

impl TrainConfig {
    pub fn new(learning_rate: f64, momentum: f64, error_threshold: f64) -> Self {
        TrainConfig {
            learning_rate,
            momentum,
            error_threshold,
            ..TrainConfig::default()
        }
    }

    /// Reads a config from a JSON file. Missing fields keep their defaults.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
