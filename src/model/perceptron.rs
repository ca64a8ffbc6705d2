use std::fmt;

use rand::Rng;
use tracing::trace;

use crate::decision::decision::Decision;
use crate::error::{PerceptronError, Result};
use crate::math::vector::{add_scaled, dot, random_scalar, random_uniform};

/// A weight vector plus bias.
///
/// The number of weights is fixed at construction and every input passed to
/// `forward` or `update` must have exactly that many values.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: Vec<f64>,
    bias: f64,
}

impl Perceptron {
    /// Creates a perceptron with `dimensions` weights; the weights and the bias
    /// are drawn independently from (-1, 1) using `rng`.
    pub fn new<R: Rng + ?Sized>(dimensions: usize, rng: &mut R) -> Result<Perceptron> {
        if dimensions == 0 {
            return Err(PerceptronError::InvalidDimensions(dimensions));
        }
        let bias = random_scalar(rng);
        let weights = random_uniform(dimensions, rng);
        Ok(Perceptron { weights, bias })
    }

    /// Same as `new`, seeded from the thread-local generator.
    pub fn with_thread_rng(dimensions: usize) -> Result<Perceptron> {
        Perceptron::new(dimensions, &mut rand::thread_rng())
    }

    /// Builds a perceptron from known parameters.
    pub fn from_parts(weights: Vec<f64>, bias: f64) -> Result<Perceptron> {
        if weights.is_empty() {
            return Err(PerceptronError::InvalidDimensions(0));
        }
        Ok(Perceptron { weights, bias })
    }

    pub fn dimensions(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Weighted sum `bias + Σ weights[i] * input[i]`, before any decision.
    pub fn raw(&self, input: &[f64]) -> Result<f64> {
        self.check_dimensions(input)?;
        Ok(self.bias + dot(&self.weights, input))
    }

    /// Passes the weighted sum of `input` through `decision`.
    pub fn forward<D: Decision + ?Sized>(&self, input: &[f64], decision: &D) -> Result<f64> {
        let z = self.raw(input)?;
        Ok(decision.decide(z))
    }

    /// Delta rule: `bias += rate * delta`, `weights[i] += rate * delta * input[i]`.
    ///
    /// Nothing is modified when the input has the wrong length.
    pub fn update(&mut self, input: &[f64], delta: f64, rate: f64) -> Result<()> {
        self.check_dimensions(input)?;
        let step = rate * delta;
        self.bias += step;
        add_scaled(&mut self.weights, input, step);
        trace!(delta, rate, bias = self.bias, "applied delta rule");
        Ok(())
    }

    pub(crate) fn check_dimensions(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.weights.len() {
            return Err(PerceptronError::DimensionMismatch {
                expected: self.weights.len(),
                got: input.len(),
            });
        }
        Ok(())
    }
}

/// Renders as `[w0, w1, ..., wN], bias` with two decimals per value.
/// Diagnostic output only; it is not meant to be parsed back.
impl fmt::Display for Perceptron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weights: Vec<String> = self.weights.iter()
            .map(|w| format!("{w:.2}"))
            .collect();
        write!(f, "[{}], {:.2}", weights.join(", "), self.bias)
    }
}
