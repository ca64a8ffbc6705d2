use tracing::debug;

use crate::{
    data::sample::Sample,
    decision::decision::Decision,
    error::Result,
    model::perceptron::Perceptron,
};

/// Runs exactly one online epoch over `samples`, in order.
///
/// Every sample is evaluated with `forward` and immediately followed by an
/// `update` with `delta = label - predicted`. A sample of the wrong length
/// stops the pass with `DimensionMismatch`; updates from earlier samples are
/// kept.
pub fn learn<D: Decision + ?Sized>(
    perceptron: &mut Perceptron,
    decision: &D,
    samples: &[Sample],
    rate: f64,
) -> Result<()> {
    debug!(samples = samples.len(), rate, "learn pass");

    for sample in samples {
        let predicted = perceptron.forward(&sample.input, decision)?;
        let delta = sample.label - predicted;
        perceptron.update(&sample.input, delta, rate)?;
    }

    Ok(())
}
