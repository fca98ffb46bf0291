pub mod dataset;
pub mod life;

pub use dataset::{life_dataset, Sample};
pub use life::survives;
