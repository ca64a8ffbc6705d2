pub mod trainer;
pub mod train_config;

pub use trainer::learn;
pub use train_config::TrainConfig;
