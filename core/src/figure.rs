//! Validated population values and thousands-separator formatting.
//!
//! A figure is validated exactly once, at construction, and is immutable
//! afterwards. There is no setter path to re-validate.

use crate::error::{PopError, PopResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative, whole-number population count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopulationFigure(u64);

impl PopulationFigure {
    /// Construct from any finite, non-negative number. The value is
    /// rounded to the nearest whole number, ties to even.
    pub fn new(value: f64) -> PopResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(PopError::InvalidPopulation { value });
        }
        Ok(Self(round_half_to_even(value) as u64))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn formatted(self, sep: ThousandsSeparator) -> String {
        format_grouped(self.0, sep)
    }
}

impl fmt::Display for PopulationFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted(ThousandsSeparator::Comma))
    }
}

/// Round to the nearest integer, resolving ties toward the even
/// neighbour (banker's rounding). Only defined for non-negative input.
pub fn round_half_to_even(value: f64) -> f64 {
    let floor = value.floor();
    let fraction = value - floor;
    if fraction > 0.5 {
        floor + 1.0
    } else if fraction < 0.5 {
        floor
    } else if (floor as u64) % 2 == 0 {
        floor
    } else {
        floor + 1.0
    }
}

/// Digit-group separator for rendered population figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThousandsSeparator {
    Comma,
    Space,
    Dot,
    /// Non-breaking LaTeX half space, for table output.
    LatexHalfSpace,
    Underscore,
}

impl ThousandsSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Space => " ",
            Self::Dot => ".",
            Self::LatexHalfSpace => "\\,",
            Self::Underscore => "_",
        }
    }
}

/// Group the digits of a whole number with the given separator.
/// For values that are already integral (grand totals, counts) — no
/// validation or rounding involved.
pub fn format_grouped(value: u64, sep: ThousandsSeparator) -> String {
    group_digits(value, sep.as_str())
}

fn group_digits(value: u64, sep: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + sep.len() * (digits.len() / 3));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out
}
