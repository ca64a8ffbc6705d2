use tracing::debug;

use crate::{
    data::sample::Sample,
    decision::decision::Decision,
    error::{PerceptronError, Result},
    model::perceptron::Perceptron,
};

/// Fraction of `samples` whose prediction equals the label exactly.
///
/// The comparison is strict `==`, with no tolerance. That is meaningful for
/// discrete decisions such as `threshold`; with `sigmoid` the caller has to
/// round predictions (e.g. wrap it in a closure) or accuracy will sit near
/// zero.
pub fn verify<D: Decision + ?Sized>(
    perceptron: &Perceptron,
    samples: &[Sample],
    decision: &D,
) -> Result<f64> {
    if samples.is_empty() {
        return Err(PerceptronError::EmptyDataset);
    }

    let mut correct = 0usize;
    for sample in samples {
        if perceptron.forward(&sample.input, decision)? == sample.label {
            correct += 1;
        }
    }

    let accuracy = correct as f64 / samples.len() as f64;
    debug!(correct, total = samples.len(), accuracy, "verified");
    Ok(accuracy)
}
