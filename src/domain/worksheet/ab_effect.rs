//! Narrowing Down stage - campaign A/B mean comparison.
//!
//! T-test imagery: the two campaigns' simulated sales are compared by mean
//! difference only. No hypothesis test is performed.

use serde::{Deserialize, Serialize};

use super::stats::{mean, NormalSampler};

/// Fixed seed so the panel shows the same campaigns on every rerun.
const EFFECT_SEED: u64 = 1;

const MIN_SAMPLE_SIZE: u32 = 10;
const MAX_SAMPLE_SIZE: u32 = 200;
const PREVIEW_ROWS: usize = 5;

const CAMPAIGN_A_MEAN: f64 = 100.0;
const CAMPAIGN_A_STD_DEV: f64 = 20.0;
const CAMPAIGN_B_MEAN: f64 = 110.0;
const CAMPAIGN_B_STD_DEV: f64 = 25.0;

/// Inputs for the A/B effect panel.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AbEffectInput {
    /// Sales samples per campaign (slider 10-200, step 10).
    #[serde(default = "default_sample_size")]
    pub sample_size: u32,
}

fn default_sample_size() -> u32 {
    40
}

impl Default for AbEffectInput {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
        }
    }
}

/// One preview row of paired sales figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesPair {
    pub campaign_a: f64,
    pub campaign_b: f64,
}

/// The rendered A/B panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbEffectOutput {
    pub preview: Vec<SalesPair>,
    pub mean_a: f64,
    pub mean_b: f64,
    /// Mean difference B - A.
    pub difference: f64,
}

/// Simulates both campaigns' sales and compares their means.
pub fn render_ab_effect(input: &AbEffectInput) -> AbEffectOutput {
    let size = input.sample_size.clamp(MIN_SAMPLE_SIZE, MAX_SAMPLE_SIZE) as usize;
    let mut sampler = NormalSampler::new(EFFECT_SEED);

    let a = sampler.sample_vec(CAMPAIGN_A_MEAN, CAMPAIGN_A_STD_DEV, size);
    let b = sampler.sample_vec(CAMPAIGN_B_MEAN, CAMPAIGN_B_STD_DEV, size);

    let mean_a = mean(&a);
    let mean_b = mean(&b);

    AbEffectOutput {
        preview: a
            .iter()
            .zip(&b)
            .take(PREVIEW_ROWS)
            .map(|(x, y)| SalesPair {
                campaign_a: *x,
                campaign_b: *y,
            })
            .collect(),
        mean_a,
        mean_b,
        difference: mean_b - mean_a,
    }
}
