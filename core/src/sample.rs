//! Candidate samples and the acceptance predicates.
//!
//! A raw sample is six magnitudes drawn from the configured normal
//! distribution, sorted ascending, with a derived total. Negative raw
//! magnitudes are legal here — the minimum-share predicate is what keeps
//! them out of accepted samples. All four predicates must hold
//! simultaneously before a sample is handed to the scaler.

use crate::config::GeneratorConfig;
use crate::error::{PopError, PopResult};
use crate::rng::GeneratorRng;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RawSample {
    values: Vec<f64>,
    total: f64,
}

impl RawSample {
    /// Draw one candidate: `province_count` values from
    /// Normal(raw_mean, raw_stddev), sorted ascending.
    pub fn draw(rng: &mut GeneratorRng, config: &GeneratorConfig) -> PopResult<Self> {
        let values =
            rng.draw_normal_vector(config.raw_mean, config.raw_stddev, config.province_count);
        if values.iter().any(|v| !v.is_finite()) {
            return Err(PopError::NonFiniteDraw {
                context: "raw population sample",
            });
        }
        Ok(Self::from_values(values))
    }

    /// Build a sample from explicit magnitudes (sorted here, not by the
    /// caller). Mostly useful for exercising the predicates directly.
    pub fn from_values(mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        let total = values.iter().sum();
        Self { values, total }
    }

    /// Magnitudes in ascending order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Top two provinces hold roughly half the total — an obvious
    /// "big two" that does not render the rest insignificant.
    pub fn concentration_in_band(&self) -> bool {
        let n = self.values.len();
        let top_two = self.values[n - 2] + self.values[n - 1];
        let share = top_two / self.total;
        share > 0.475 && share < 0.525
    }

    /// The two largest provinces stay comparably sized.
    pub fn top_two_comparable(&self) -> bool {
        let n = self.values.len();
        self.values[n - 2] / self.values[n - 1] > 0.925
    }

    /// The third-largest province must not approach "big two" scale;
    /// no "big three".
    pub fn third_highest_capped(&self) -> bool {
        let n = self.values.len();
        self.values[n - 3] / self.total < 1.0 / 6.0
    }

    /// The smallest province must not be negligible (or negative).
    pub fn smallest_share_sufficient(&self) -> bool {
        self.values[0] / self.total > 0.06
    }

    /// All four acceptance predicates at once.
    pub fn satisfies_constraints(&self) -> bool {
        self.concentration_in_band()
            && self.top_two_comparable()
            && self.third_highest_capped()
            && self.smallest_share_sufficient()
    }
}
