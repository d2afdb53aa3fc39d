//! The generation engine — rejection sampling, scaling, city jitter.
//!
//! DRAW ORDER (fixed, never reordered — reordering changes every
//! downstream value for existing seeds):
//!   1. Rejection loop: raw candidates until all four predicates hold.
//!   2. Scale jitter: one Normal(1, s) multiplier per province.
//!   3. City jitter: one independent multiplier per province.
//!
//! Generation runs once, start to finish; the RNG is created from the
//! seed at the top and owned exclusively by the run. The result is an
//! immutable Dataset — regeneration means a fresh run with fresh state.

use crate::config::GeneratorConfig;
use crate::error::{PopError, PopResult};
use crate::figure::PopulationFigure;
use crate::rng::GeneratorRng;
use crate::sample::RawSample;
use log::{debug, info};
use serde::Serialize;

/// The final result bundle of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    populations: Vec<PopulationFigure>,
    city_jitter: Vec<f64>,
    iterations: u64,
    target_total: u64,
    raw: RawSample,
}

impl Dataset {
    /// Run the whole generation pipeline for one configuration.
    /// Returns a complete dataset or an explicit error — never a
    /// partially filled result.
    pub fn generate(config: GeneratorConfig) -> PopResult<Self> {
        config.validate()?;
        let mut rng = GeneratorRng::new(config.seed);

        let (raw, iterations) = accept_raw_sample(&mut rng, &config)?;
        let populations = scale_to_target(&mut rng, &config, &raw)?;
        let city_jitter = draw_city_jitter(&mut rng, &config)?;

        let dataset = Self {
            populations,
            city_jitter,
            iterations,
            target_total: config.target_total,
            raw,
        };
        info!(
            "generated dataset: seed={} iterations={} total={}",
            config.seed,
            iterations,
            dataset.total_population()
        );
        Ok(dataset)
    }

    /// Reference parameters, just a seed.
    pub fn with_seed(seed: u64) -> PopResult<Self> {
        Self::generate(GeneratorConfig::new(seed))
    }

    /// Final population figures, index-aligned to the fixed province
    /// rank order (ascending long-term average). Positions come from
    /// the accepted raw sample and are never re-sorted, so jitter may
    /// leave adjacent entries slightly out of numeric order.
    pub fn populations(&self) -> &[PopulationFigure] {
        &self.populations
    }

    /// Capital-city multipliers, rank-aligned like `populations`.
    pub fn city_jitter(&self) -> &[f64] {
        &self.city_jitter
    }

    /// Candidates drawn before acceptance, inclusive; always ≥ 1.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// The national total the scaler aimed for.
    pub fn target_total(&self) -> u64 {
        self.target_total
    }

    /// Actual grand total. Deviates slightly from the target by design
    /// (jitter plus rounding); that is not an error.
    pub fn total_population(&self) -> u64 {
        self.populations.iter().map(|p| p.get()).sum()
    }

    /// The accepted pre-jitter sample, kept so callers can verify the
    /// shape constraints without replaying RNG state.
    pub fn raw_sample(&self) -> &RawSample {
        &self.raw
    }
}

/// Draw candidates until one satisfies all four predicates, or the
/// configured ceiling is hit. The counter starts at 1 and goes up by
/// exactly 1 per rejected candidate.
fn accept_raw_sample(
    rng: &mut GeneratorRng,
    config: &GeneratorConfig,
) -> PopResult<(RawSample, u64)> {
    let mut iterations: u64 = 1;
    loop {
        let candidate = RawSample::draw(rng, config)?;
        if candidate.satisfies_constraints() {
            debug!("accepted candidate on iteration {iterations}");
            return Ok((candidate, iterations));
        }
        if iterations >= config.max_iterations {
            return Err(PopError::IterationCeiling {
                limit: config.max_iterations,
            });
        }
        iterations += 1;
        if iterations % 10_000 == 0 {
            debug!("still sampling after {iterations} candidates");
        }
    }
}

/// Scale the accepted sample so the figures sum to roughly the target,
/// with an independent multiplier per province for a little spice.
/// Rank positions are preserved; nothing is re-sorted here.
fn scale_to_target(
    rng: &mut GeneratorRng,
    config: &GeneratorConfig,
    raw: &RawSample,
) -> PopResult<Vec<PopulationFigure>> {
    let jitter = rng.draw_normal_vector(1.0, config.scale_jitter_stddev, config.province_count);
    let scale = config.target_total as f64 / raw.total();
    raw.values()
        .iter()
        .zip(&jitter)
        .map(|(&value, &j)| PopulationFigure::new(value * j * scale))
        .collect()
}

/// One independent multiplier per province for its capital city.
/// A non-positive multiplier would let a city population go negative
/// downstream; that is a construction failure, never clamped.
fn draw_city_jitter(rng: &mut GeneratorRng, config: &GeneratorConfig) -> PopResult<Vec<f64>> {
    let jitter = rng.draw_normal_vector(1.0, config.city_jitter_stddev, config.province_count);
    for &j in &jitter {
        if !j.is_finite() || j <= 0.0 {
            return Err(PopError::InvalidJitter { value: j });
        }
    }
    Ok(jitter)
}
