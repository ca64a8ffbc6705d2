pub mod error;
pub mod math;
pub mod decision;
pub mod model;
pub mod data;
pub mod train;
pub mod eval;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use decision::decision::{Decision, DecisionFunction, sigmoid, threshold};
pub use model::perceptron::Perceptron;
pub use data::sample::{Sample, zip_samples};
pub use train::trainer::learn;
pub use train::train_config::TrainConfig;
pub use eval::verify::verify;
