use crate::error::{PerceptronError, Result};

/// One labeled input vector.
///
/// The label is expected to lie in the output range of whichever decision
/// function the sample is trained or verified against (usually {0, 1}).
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Vec<f64>,
    pub label: f64,
}

impl Sample {
    pub fn new(input: Vec<f64>, label: f64) -> Sample {
        Sample { input, label }
    }
}

impl From<(Vec<f64>, f64)> for Sample {
    fn from((input, label): (Vec<f64>, f64)) -> Self {
        Sample::new(input, label)
    }
}

/// Pairs parallel `inputs` / `labels` sequences index by index.
///
/// Fails with `LengthMismatch` instead of silently dropping the tail of the
/// longer sequence.
pub fn zip_samples(inputs: &[Vec<f64>], labels: &[f64]) -> Result<Vec<Sample>> {
    if inputs.len() != labels.len() {
        return Err(PerceptronError::LengthMismatch {
            inputs: inputs.len(),
            labels: labels.len(),
        });
    }
    Ok(inputs.iter()
        .zip(labels.iter())
        .map(|(input, &label)| Sample::new(input.clone(), label))
        .collect())
}
