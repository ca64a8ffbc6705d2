use perceptron::{learn, verify, sigmoid, threshold, zip_samples, Perceptron};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(2018);
    let mut p = Perceptron::new(2, &mut rng).expect("two dimensions is valid");

    let inputs = vec![
        vec![1.0, 1.0],
        vec![-1.0, -1.0],
        vec![1.0, -1.0],
        vec![-1.0, 1.0],
    ];
    let labels = vec![1.0, 0.0, 1.0, 0.0];
    let samples = zip_samples(&inputs, &labels).expect("equal lengths");

    println!("Initial: {p}");

    let rate = 0.1;
    for epoch in 0..50 {
        learn(&mut p, &threshold, &samples, rate).expect("dimensions match");
        if epoch % 10 == 0 {
            let accuracy = verify(&p, &samples, &threshold).expect("non-empty");
            println!("Epoch {epoch}: {p} accuracy = {accuracy:.2}");
        }
    }

    println!("Final:   {p}");
    println!("Threshold accuracy: {:.2}", verify(&p, &samples, &threshold).expect("non-empty"));

    // Exact matching never succeeds on raw sigmoid outputs; round them first.
    let rounded = |x: f64| sigmoid(x).round();
    println!("Sigmoid accuracy (raw):     {:.2}", verify(&p, &samples, &sigmoid).expect("non-empty"));
    println!("Sigmoid accuracy (rounded): {:.2}", verify(&p, &samples, &rounded).expect("non-empty"));

    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, p.forward(input, &sigmoid).expect("dimensions match"));
    }
}
