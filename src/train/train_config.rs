use serde::{Serialize, Deserialize};

use crate::decision::decision::DecisionFunction;

/// Training settings for a driver that calls `learn` once per epoch.
///
/// # Fields
/// - `epochs`   — how many times the driver calls `learn`
/// - `rate`     — learning rate handed to every update
/// - `decision` — decision function used for both training and the
///                accuracy checks; `Custom` cannot be saved to JSON
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub rate: f64,
    #[serde(default)]
    pub decision: DecisionFunction,
}

impl TrainConfig {
    pub fn new(epochs: usize, rate: f64, decision: DecisionFunction) -> Self {
        TrainConfig { epochs, rate, decision }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a config from a JSON file written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(50, 0.1, DecisionFunction::Threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_defaults_to_threshold() {
        let config: TrainConfig = serde_json::from_str(r#"{"epochs": 10, "rate": 0.25}"#).unwrap();
        assert_eq!(config.epochs, 10);
        assert_eq!(config.rate, 0.25);
        assert!(matches!(config.decision, DecisionFunction::Threshold));
    }

    #[test]
    fn parses_named_decision() {
        let config: TrainConfig =
            serde_json::from_str(r#"{"epochs": 1, "rate": 1.0, "decision": "sigmoid"}"#).unwrap();
        assert!(matches!(config.decision, DecisionFunction::Sigmoid));
    }

    #[test]
    fn default_matches_classroom_settings() {
        let config = TrainConfig::default();
        assert_eq!(config.epochs, 50);
        assert_eq!(config.rate, 0.1);
        assert!(matches!(config.decision, DecisionFunction::Threshold));
    }
}
