pub mod sample;

pub use sample::{Sample, zip_samples};
