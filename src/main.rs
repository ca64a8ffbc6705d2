// Thin driver around the library: trains the four-quadrant toy set and
// prints the result. Pass a TrainConfig JSON file to override the defaults.
//   cargo run -- config.json
//   RUST_LOG=debug cargo run
use perceptron::{learn, verify, Perceptron, Result, Sample, TrainConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn quadrants() -> Vec<Sample> {
    vec![
        Sample::new(vec![1.0, 1.0], 1.0),
        Sample::new(vec![-1.0, -1.0], 0.0),
        Sample::new(vec![1.0, -1.0], 1.0),
        Sample::new(vec![-1.0, 1.0], 0.0),
    ]
}

/// Calls `learn` once per configured epoch, logging accuracy after each pass.
/// Returns the accuracy of the perceptron as it stands when the loop ends.
fn run_epochs(p: &mut Perceptron, samples: &[Sample], config: &TrainConfig) -> Result<f64> {
    for epoch in 1..=config.epochs {
        learn(p, &config.decision, samples, config.rate)?;
        let accuracy = verify(p, samples, &config.decision)?;
        info!(epoch, total = config.epochs, accuracy, perceptron = %p, "epoch complete");
    }
    verify(p, samples, &config.decision)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match TrainConfig::load_json(&path) {
            Ok(config) => config,
            Err(e) => {
                error!(%path, "failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => TrainConfig::default(),
    };

    let samples = quadrants();
    let result = Perceptron::with_thread_rng(2)
        .and_then(|mut p| run_epochs(&mut p, &samples, &config).map(|accuracy| (p, accuracy)));

    match result {
        Ok((p, accuracy)) => {
            info!(epochs = config.epochs, accuracy, "training finished");
            println!("{p}");
        }
        Err(e) => {
            error!("training failed: {e}");
            std::process::exit(1);
        }
    }
}
