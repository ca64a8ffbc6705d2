use rand::distributions::Open01;
use rand::Rng;

/// Samples `len` values uniformly from the open interval (-1, 1).
///
/// `Open01` never yields 0 or 1, and `2u - 1` is exact in f64 for every value
/// it can produce, so neither endpoint is reachable.
pub fn random_uniform<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len).map(|_| random_scalar(rng)).collect()
}

/// A single draw from (-1, 1).
pub fn random_scalar<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u: f64 = rng.sample(Open01);
    2.0 * u - 1.0
}

/// Dot product of two equal-length slices. Callers check the lengths.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// `target[i] += scale * source[i]` for every index.
pub fn add_scaled(target: &mut [f64], source: &[f64], scale: f64) {
    for (t, s) in target.iter_mut().zip(source.iter()) {
        *t += scale * s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_uniform_stays_inside_open_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = random_uniform(10_000, &mut rng);
        assert_eq!(values.len(), 10_000);
        assert!(values.iter().all(|v| *v > -1.0 && *v < 1.0));
    }

    #[test]
    fn same_seed_same_values() {
        let a = random_uniform(8, &mut StdRng::seed_from_u64(42));
        let b = random_uniform(8, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn dot_product() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
        assert_eq!(dot(&[], &[]), 0.0);
    }

    #[test]
    fn add_scaled_in_place() {
        let mut w = vec![1.0, -1.0];
        add_scaled(&mut w, &[2.0, 4.0], 0.5);
        assert_eq!(w, vec![2.0, 1.0]);
    }
}
