//! Province and capital-city reference data.
//!
//! The catalog is a JSON file listing the six provinces in ascending
//! order of long-term average population — the same rank order the
//! generator's output is aligned to. Joining catalog and dataset is a
//! straight walk down both lists, position by position.

use crate::error::{PopError, PopResult};
use crate::figure::{PopulationFigure, ThousandsSeparator};
use crate::generator::Dataset;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct City {
    pub name: String,
    /// None means the population is unknown, not zero.
    pub population: Option<PopulationFigure>,
}

impl City {
    pub fn population_string(&self) -> String {
        match self.population {
            Some(p) => p.formatted(ThousandsSeparator::Comma),
            None => "unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Province {
    pub name: String,
    pub population: PopulationFigure,
    pub capital: City,
}

/// One entry in the JSON reference file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvinceEntry {
    pub name: String,
    pub capital_city: CapitalEntry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CapitalEntry {
    #[serde(default = "placeholder_city_name")]
    pub name: String,
    #[serde(default)]
    pub base_population: Option<f64>,
}

fn placeholder_city_name() -> String {
    "Nowheresville".to_string()
}

#[derive(Debug, Clone)]
pub struct ProvinceCatalog {
    entries: Vec<ProvinceEntry>,
}

impl ProvinceCatalog {
    pub fn from_json(text: &str) -> PopResult<Self> {
        let entries: Vec<ProvinceEntry> = serde_json::from_str(text)?;
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> PopResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ProvinceEntry] {
        &self.entries
    }

    /// Join the catalog with a generated dataset, rank position by rank
    /// position.
    ///
    /// A capital with a missing or zero base population stays unknown
    /// and its jitter multiplier goes unused. A negative base fails
    /// figure validation — it is never silently clamped.
    pub fn into_provinces(self, dataset: &Dataset) -> PopResult<Vec<Province>> {
        if self.entries.len() != dataset.populations().len() {
            return Err(PopError::CatalogSizeMismatch {
                expected: dataset.populations().len(),
                got: self.entries.len(),
            });
        }
        self.entries
            .into_iter()
            .enumerate()
            .map(|(rank, entry)| {
                let population = match entry.capital_city.base_population {
                    None => None,
                    Some(base) if base == 0.0 => None,
                    Some(base) => {
                        Some(PopulationFigure::new(base * dataset.city_jitter()[rank])?)
                    }
                };
                Ok(Province {
                    name: entry.name,
                    population: dataset.populations()[rank],
                    capital: City {
                        name: entry.capital_city.name,
                        population,
                    },
                })
            })
            .collect()
    }
}
