//! Offer stage - competitor quality-score variance comparison.
//!
//! F-test imagery: two competitors' simulated quality scores are compared
//! by sample variance only. No hypothesis test is performed.

use serde::{Deserialize, Serialize};

use super::stats::{sample_variance, NormalSampler};

/// Fixed seed so the panel shows the same competitors on every rerun.
const QUALITY_SEED: u64 = 0;

const MIN_SAMPLE_SIZE: u32 = 10;
const MAX_SAMPLE_SIZE: u32 = 200;
const PREVIEW_ROWS: usize = 5;

const COMPETITOR_A_MEAN: f64 = 70.0;
const COMPETITOR_A_STD_DEV: f64 = 10.0;
const COMPETITOR_B_MEAN: f64 = 75.0;
const COMPETITOR_B_STD_DEV: f64 = 15.0;

/// Inputs for the competitor panel.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CompetitorInput {
    /// Scores per competitor (slider 10-200, step 10).
    #[serde(default = "default_sample_size")]
    pub sample_size: u32,
}

fn default_sample_size() -> u32 {
    50
}

impl Default for CompetitorInput {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
        }
    }
}

/// One preview row of paired scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScorePair {
    pub competitor_a: f64,
    pub competitor_b: f64,
}

/// The rendered competitor panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorOutput {
    pub preview: Vec<ScorePair>,
    pub variance_a: f64,
    pub variance_b: f64,
}

/// Simulates both competitors' scores and compares their spread.
pub fn render_competitor(input: &CompetitorInput) -> CompetitorOutput {
    let size = input.sample_size.clamp(MIN_SAMPLE_SIZE, MAX_SAMPLE_SIZE) as usize;
    let mut sampler = NormalSampler::new(QUALITY_SEED);

    let a = sampler.sample_vec(COMPETITOR_A_MEAN, COMPETITOR_A_STD_DEV, size);
    let b = sampler.sample_vec(COMPETITOR_B_MEAN, COMPETITOR_B_STD_DEV, size);

    CompetitorOutput {
        preview: a
            .iter()
            .zip(&b)
            .take(PREVIEW_ROWS)
            .map(|(x, y)| ScorePair {
                competitor_a: *x,
                competitor_b: *y,
            })
            .collect(),
        variance_a: sample_variance(&a),
        variance_b: sample_variance(&b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_reproducible() {
        let input = CompetitorInput::default();
        assert_eq!(render_competitor(&input), render_competitor(&input));
    }

    #[test]
    fn wider_distribution_shows_larger_variance() {
        let output = render_competitor(&CompetitorInput { sample_size: 200 });
        assert!(output.variance_b > output.variance_a);
    }

    #[test]
    fn preview_is_capped_at_five_pairs() {
        let output = render_competitor(&CompetitorInput::default());
        assert_eq!(output.preview.len(), 5);
    }

    #[test]
    fn sample_size_is_clamped_to_slider_bounds() {
        // Too small a request still draws the slider minimum, enough for a
        // meaningful variance.
        let output = render_competitor(&CompetitorInput { sample_size: 1 });
        assert!(output.variance_a > 0.0);
    }
}
