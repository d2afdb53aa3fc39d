//! provpop-core — constrained random generation of provincial population
//! figures for a fictional-world reporting tool.
//!
//! The engine draws candidate population magnitudes from a normal
//! distribution and rejects them until four statistical shape
//! constraints hold simultaneously (a "big two" holding roughly half
//! the total, comparably sized; no "big three"; no negligible
//! smallest province). The accepted candidate is then scaled to a
//! fixed national total with independent per-province jitter, plus a
//! second jitter set for the capital cities.
//!
//! Same seed, same dataset — bit for bit. See the RULE in [`rng`].

pub mod config;
pub mod error;
pub mod figure;
pub mod generator;
pub mod province;
pub mod report;
pub mod rng;
pub mod sample;

pub use config::{GeneratorConfig, DEFAULT_TARGET_TOTAL, PROVINCE_COUNT, REFERENCE_SEED};
pub use error::{PopError, PopResult};
pub use figure::{format_grouped, PopulationFigure, ThousandsSeparator};
pub use generator::Dataset;
pub use province::{City, Province, ProvinceCatalog};
pub use report::{LatexTable, PlainTextReport};
pub use sample::RawSample;
