//! Control-surface state and its widget constraints.

use std::ops::RangeInclusive;

use barchart_core::error::DomainError;
use serde::{Deserialize, Serialize};

use super::palette::BarColor;
use super::sample::{self, Sample};

/// Allowed values of the seed widget.
pub const SEED_RANGE: RangeInclusive<u32> = 1..=1000;
/// Allowed values of the minimum-value widget.
pub const MIN_VALUE_RANGE: RangeInclusive<u32> = 1..=50;
/// Allowed values of the maximum-value widget.
pub const MAX_VALUE_RANGE: RangeInclusive<u32> = 51..=200;

/// Everything the sidebar can set. Missing fields take the widget defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartControls {
    /// Seed for the generator.
    pub seed: u32,
    /// Inclusive lower bound of the values.
    pub min_value: u32,
    /// Exclusive upper bound of the values.
    pub max_value: u32,
    /// Bar fill color.
    pub color: BarColor,
    /// Whether the raw-data table is shown.
    pub show_raw_data: bool,
}

impl Default for ChartControls {
    fn default() -> Self {
        Self {
            seed: 42,
            min_value: 1,
            max_value: 100,
            color: BarColor::default(),
            show_raw_data: false,
        }
    }
}

fn check(name: &str, value: u32, range: &RangeInclusive<u32>) -> Result<(), DomainError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "{name} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

impl ChartControls {
    /// Enforces the widget constraints of each numeric control.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first control out of range.
    pub fn validate(&self) -> Result<(), DomainError> {
        check("seed", self.seed, &SEED_RANGE)?;
        check("min_value", self.min_value, &MIN_VALUE_RANGE)?;
        check("max_value", self.max_value, &MAX_VALUE_RANGE)
    }

    /// Validates the controls and generates the sample they describe.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a control outside its widget
    /// range, or `DomainError::InvalidRange` if the bounds are inverted.
    pub fn sample(&self) -> Result<Sample, DomainError> {
        self.validate()?;
        sample::generate(self.seed, self.min_value, self.max_value)
    }

    /// Encodes the controls as a URL query string, without the leading `?`.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut query = format!(
            "seed={}&min_value={}&max_value={}&color={}",
            self.seed, self.min_value, self.max_value, self.color
        );
        if self.show_raw_data {
            query.push_str("&show_raw_data=true");
        }
        query
    }
}
