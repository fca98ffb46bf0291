pub mod activation;
pub mod data;
pub mod error;
pub mod layers;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_derivative};
pub use data::{life_dataset, Sample};
pub use error::{Error, Result};
pub use layers::{Layer, Unit};
pub use network::{Network, NetworkSpec};
pub use train::{train_until_converged, EpochStats, TrainConfig, TrainOutcome};
