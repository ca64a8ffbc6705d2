//! Errors raised by malformed calls into the perceptron core.

/// Precondition violations surfaced to the caller.
///
/// None of these are transient; each one means the caller passed something
/// the model cannot work with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PerceptronError {
    #[error("dimension mismatch: perceptron has {expected} weights, input has {got} values")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("cannot compute accuracy over an empty dataset")]
    EmptyDataset,

    #[error("invalid dimensionality {0}: a perceptron needs at least one weight")]
    InvalidDimensions(usize),

    #[error("length mismatch: {inputs} inputs but {labels} labels")]
    LengthMismatch { inputs: usize, labels: usize },
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
