//! Action stage - noisy linear sales trend.

use serde::{Deserialize, Serialize};

use super::stats::{linspace, NormalSampler};

/// Fixed seed so the panel shows the same trajectory on every rerun.
const TREND_SEED: u64 = 2;

const MIN_PERIODS: u32 = 6;
const MAX_PERIODS: u32 = 36;

const INDEX_START: f64 = 80.0;
const INDEX_END: f64 = 150.0;
const NOISE_STD_DEV: f64 = 5.0;

/// Inputs for the growth-trend panel.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GrowthInput {
    /// Months to plot (slider 6-36, step 6).
    #[serde(default = "default_periods")]
    pub periods: u32,
}

fn default_periods() -> u32 {
    12
}

impl Default for GrowthInput {
    fn default() -> Self {
        Self {
            periods: default_periods(),
        }
    }
}

/// One point of the sales-index line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyIndex {
    pub month: u32,
    pub index: f64,
}

/// The rendered growth panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthOutput {
    pub series: Vec<MonthlyIndex>,
}

/// Builds a linear index ramp with normal noise, month 1 through `periods`.
pub fn render_growth(input: &GrowthInput) -> GrowthOutput {
    let periods = input.periods.clamp(MIN_PERIODS, MAX_PERIODS) as usize;
    let mut sampler = NormalSampler::new(TREND_SEED);

    let series = linspace(INDEX_START, INDEX_END, periods)
        .into_iter()
        .enumerate()
        .map(|(i, trend)| MonthlyIndex {
            month: i as u32 + 1,
            index: trend + sampler.sample(0.0, NOISE_STD_DEV),
        })
        .collect();

    GrowthOutput { series }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_reproducible() {
        let input = GrowthInput::default();
        assert_eq!(render_growth(&input), render_growth(&input));
    }

    #[test]
    fn series_covers_every_month_once() {
        let output = render_growth(&GrowthInput { periods: 24 });
        assert_eq!(output.series.len(), 24);
        assert_eq!(output.series[0].month, 1);
        assert_eq!(output.series[23].month, 24);
    }

    #[test]
    fn trend_rises_over_the_horizon() {
        let output = render_growth(&GrowthInput { periods: 36 });
        let first = output.series.first().unwrap().index;
        let last = output.series.last().unwrap().index;
        // 70 points of ramp dominate 5 points of noise.
        assert!(last > first);
    }

    #[test]
    fn periods_are_clamped_to_slider_bounds() {
        assert_eq!(render_growth(&GrowthInput { periods: 1 }).series.len(), 6);
        assert_eq!(render_growth(&GrowthInput { periods: 99 }).series.len(), 36);
    }
}
