use serde::{Serialize, Deserialize};

/// Hard step at zero: 1 for strictly positive input, 0 otherwise.
pub fn threshold(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}

/// Logistic function, output in (0, 1), 0.5 at the origin.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Anything that maps a raw weighted sum onto a class signal.
///
/// Implemented by `DecisionFunction` and by every `Fn(f64) -> f64`, so plain
/// functions and capturing closures can be passed wherever a decision is
/// expected. Outputs are expected to lie in [0, 1]; this is not checked.
pub trait Decision {
    fn decide(&self, x: f64) -> f64;
}

impl<F> Decision for F
where
    F: Fn(f64) -> f64,
{
    fn decide(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Named decision strategies.
///
/// `Custom` wraps a plain function pointer. It is skipped by serde, so a
/// `TrainConfig` carrying one cannot be written to JSON.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionFunction {
    #[default]
    Threshold,
    Sigmoid,
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl DecisionFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            DecisionFunction::Threshold => threshold(x),
            DecisionFunction::Sigmoid => sigmoid(x),
            DecisionFunction::Custom(f) => f(x),
        }
    }
}

impl Decision for DecisionFunction {
    fn decide(&self, x: f64) -> f64 {
        self.function(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> impl Iterator<Item = f64> {
        (-300..=300).map(|i| i as f64 * 0.1)
    }

    #[test]
    fn threshold_is_a_step_at_zero() {
        assert_eq!(threshold(0.0), 0.0);
        assert_eq!(threshold(-0.0), 0.0);
        assert_eq!(threshold(f64::MIN_POSITIVE), 1.0);
        assert_eq!(threshold(-1e-12), 0.0);
        for x in grid() {
            let expected = if x > 0.0 { 1.0 } else { 0.0 };
            assert_eq!(threshold(x), expected, "x = {x}");
        }
    }

    #[test]
    fn sigmoid_is_half_at_origin() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_is_bounded_and_strictly_increasing() {
        let values: Vec<f64> = grid().map(sigmoid).collect();
        assert!(values.iter().all(|v| *v > 0.0 && *v < 1.0));
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn named_variants_dispatch() {
        assert_eq!(DecisionFunction::Threshold.decide(2.0), 1.0);
        assert_eq!(DecisionFunction::Sigmoid.decide(0.0), 0.5);
        assert_eq!(DecisionFunction::Custom(|x| x * 2.0).decide(0.25), 0.5);
    }

    #[test]
    fn default_is_threshold() {
        let d = DecisionFunction::default();
        assert!(matches!(d, DecisionFunction::Threshold));
        assert_eq!(d.decide(0.0), 0.0);
        assert_eq!(d.decide(0.1), 1.0);
    }

    #[test]
    fn closures_are_decisions() {
        let cutoff = 0.5;
        let shifted = move |x: f64| if x > cutoff { 1.0 } else { 0.0 };
        assert_eq!(shifted.decide(0.4), 0.0);
        assert_eq!(shifted.decide(0.6), 1.0);
        assert_eq!(threshold.decide(1.0), 1.0);
    }

    #[test]
    fn serializes_named_variants_only() {
        assert_eq!(serde_json::to_string(&DecisionFunction::Sigmoid).unwrap(), "\"sigmoid\"");
        let parsed: DecisionFunction = serde_json::from_str("\"threshold\"").unwrap();
        assert!(matches!(parsed, DecisionFunction::Threshold));
        assert!(serde_json::to_string(&DecisionFunction::Custom(sigmoid)).is_err());
    }
}
