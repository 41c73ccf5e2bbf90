//! Affinity stage - simulated age distribution for the target persona.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::stats::NormalSampler;

const MIN_SAMPLE_SIZE: u32 = 50;
const MAX_SAMPLE_SIZE: u32 = 500;
const AGE_MEAN: f64 = 30.0;
const AGE_STD_DEV: f64 = 8.0;
const AGE_FLOOR: i64 = 15;
const AGE_CEIL: i64 = 65;
const PREVIEW_ROWS: usize = 5;

/// Inputs for the persona-distribution panel.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PersonaInput {
    /// Number of simulated respondents (slider 50-500, step 50).
    #[serde(default = "default_sample_size")]
    pub sample_size: u32,
    /// Seed for the dummy draw, so reruns reproduce the same distribution.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_sample_size() -> u32 {
    200
}

fn default_seed() -> u64 {
    42
}

impl Default for PersonaInput {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            seed: default_seed(),
        }
    }
}

/// One bar of the age histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBucket {
    pub age: i64,
    pub count: u32,
}

/// The rendered persona panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaOutput {
    /// First rows of the simulated ages, mirroring a dataframe head.
    pub preview: Vec<i64>,
    /// Count per age, ascending.
    pub histogram: Vec<AgeBucket>,
}

/// Simulates ages ~ Normal(30, 8), truncated to whole years and clamped to
/// the 15-65 bracket, then buckets them for the histogram.
pub fn render_persona(input: &PersonaInput) -> PersonaOutput {
    let size = input.sample_size.clamp(MIN_SAMPLE_SIZE, MAX_SAMPLE_SIZE) as usize;
    let mut sampler = NormalSampler::new(input.seed);

    let ages: Vec<i64> = (0..size)
        .map(|_| (sampler.sample(AGE_MEAN, AGE_STD_DEV) as i64).clamp(AGE_FLOOR, AGE_CEIL))
        .collect();

    let mut counts: BTreeMap<i64, u32> = BTreeMap::new();
    for age in &ages {
        *counts.entry(*age).or_insert(0) += 1;
    }

    PersonaOutput {
        preview: ages.iter().take(PREVIEW_ROWS).copied().collect(),
        histogram: counts
            .into_iter()
            .map(|(age, count)| AgeBucket { age, count })
            .collect(),
    }
}
