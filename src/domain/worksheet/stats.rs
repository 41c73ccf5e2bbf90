//! Small numeric helpers shared by the stage renderers.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with one delta degree of freedom; 0.0 below two samples.
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    sum_sq / (values.len() - 1) as f64
}

/// `count` evenly spaced values from `start` to `stop`, both inclusive.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Deterministic normal-variate sampler over a seeded [`StdRng`].
///
/// Uses the Box-Muller transform on uniform draws; one uniform pair per
/// sample keeps the draw sequence a simple function of the seed.
pub struct NormalSampler {
    rng: StdRng,
}

impl NormalSampler {
    /// Creates a sampler with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws one sample from Normal(mean, std_dev).
    pub fn sample(&mut self, mean: f64, std_dev: f64) -> f64 {
        // 1 - u keeps the logarithm away from zero.
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std_dev * z
    }

    /// Draws `count` samples from Normal(mean, std_dev).
    pub fn sample_vec(&mut self, mean: f64, std_dev: f64, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.sample(mean, std_dev)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_known_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn sample_variance_uses_one_delta_degree() {
        // Variance of [2, 4, 6] around mean 4 is (4 + 0 + 4) / 2 = 4.
        assert_eq!(sample_variance(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn sample_variance_below_two_samples_is_zero() {
        assert_eq!(sample_variance(&[5.0]), 0.0);
        assert_eq!(sample_variance(&[]), 0.0);
    }

    #[test]
    fn linspace_hits_both_endpoints() {
        let values = linspace(80.0, 150.0, 8);
        assert_eq!(values.len(), 8);
        assert!((values[0] - 80.0).abs() < 1e-9);
        assert!((values[7] - 150.0).abs() < 1e-9);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn same_seed_reproduces_the_same_draws() {
        let a = NormalSampler::new(7).sample_vec(100.0, 20.0, 16);
        let b = NormalSampler::new(7).sample_vec(100.0, 20.0, 16);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = NormalSampler::new(0).sample_vec(0.0, 1.0, 8);
        let b = NormalSampler::new(1).sample_vec(0.0, 1.0, 8);
        assert_ne!(a, b);
    }

    #[test]
    fn samples_center_near_the_requested_mean() {
        let samples = NormalSampler::new(42).sample_vec(30.0, 8.0, 2000);
        let m = mean(&samples);
        assert!((m - 30.0).abs() < 1.0, "mean drifted to {}", m);
    }
}
