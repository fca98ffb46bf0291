use std::time::Instant;

use crate::data::dataset::Sample;
use crate::error::Result;
use crate::network::network::Network;
use crate::train::epoch_stats::{EpochStats, TrainOutcome};
use crate::train::train_config::TrainConfig;

/// Trains `network` one sample at a time, in order, until an epoch's largest
/// absolute error drops to `config.error_threshold`.
///
/// The error of a sample is the signed value returned by `Network::train`;
/// the epoch error is the largest of their absolute values.
///
/// # Early termination
/// The loop also stops when:
/// - `config.max_epochs` epochs have run, **or**
/// - the `progress_tx` receiver has been dropped.
///
/// An empty `samples` slice converges after one epoch with zero error.
pub fn train_until_converged(
    network: &mut Network,
    samples: &[Sample],
    config: &TrainConfig,
) -> Result<TrainOutcome> {
    let mut epochs = 0;
    let mut max_error = 0.0;

    loop {
        if config.max_epochs.map_or(false, |limit| epochs >= limit) {
            break;
        }

        let t_start = Instant::now();
        max_error = run_one_epoch(network, samples, config)?;
        epochs += 1;

        if max_error <= config.error_threshold {
            break;
        }

        if config.report_every > 0 && epochs % config.report_every == 0 {
            let stats = EpochStats {
                epoch: epochs,
                max_error,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            tracing::info!(epoch = stats.epoch, max_error = stats.max_error, "training");

            if let Some(ref tx) = config.progress_tx {
                if tx.send(stats).is_err() {
                    break;
                }
            }
        }
    }

    let converged = epochs > 0 && max_error <= config.error_threshold;
    if converged {
        tracing::info!(epochs, max_error, "converged");
    } else {
        tracing::warn!(epochs, max_error, "stopped before reaching error threshold");
    }

    Ok(TrainOutcome {
        epochs,
        max_error,
        converged,
    })
}

/// One pass over `samples`; returns the largest absolute error.
fn run_one_epoch(network: &mut Network, samples: &[Sample], config: &TrainConfig) -> Result<f64> {
    let mut max_error: f64 = 0.0;
    for sample in samples {
        let error = network.train(
            &sample.input,
            &sample.expected,
            config.learning_rate,
            config.momentum,
        )?;
        max_error = max_error.max(error.abs());
    }
    Ok(max_error)
}
