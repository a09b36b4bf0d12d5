//! The `Sample` value and the generator that produces it.

use barchart_core::error::DomainError;
use barchart_core::rng::{DeterministicRng, SeededRng};
use serde::{Deserialize, Serialize};

/// Number of bars in every sample.
pub const SAMPLE_SIZE: usize = 10;

/// A validated half-open value range `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleBounds {
    lower: u32,
    upper: u32,
}

impl SampleBounds {
    /// Creates a range, rejecting `upper <= lower`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRange` if the range is empty.
    pub fn new(lower: u32, upper: u32) -> Result<Self, DomainError> {
        if upper <= lower {
            return Err(DomainError::InvalidRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Inclusive lower bound.
    #[must_use]
    pub fn lower(&self) -> u32 {
        self.lower
    }

    /// Exclusive upper bound.
    #[must_use]
    pub fn upper(&self) -> u32 {
        self.upper
    }

    /// Whether `value` falls inside the range.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.lower..self.upper).contains(&value)
    }
}

/// One labelled value of a sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Category label, e.g. `Item 3`.
    pub label: String,
    /// The drawn value.
    pub value: u32,
}

/// Ten labelled values drawn from a seeded generator.
///
/// A sample is built once per interaction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    seed: u32,
    lower_bound: u32,
    upper_bound: u32,
    values: Vec<u32>,
    labels: Vec<String>,
}

/// Label for the draw at zero-based position `index`.
#[must_use]
pub fn label_for(index: usize) -> String {
    format!("Item {}", index + 1)
}

/// Generates a sample from a fresh ChaCha8 generator seeded with `seed`.
///
/// # Errors
///
/// Returns `DomainError::InvalidRange` if `upper_bound <= lower_bound`.
pub fn generate(seed: u32, lower_bound: u32, upper_bound: u32) -> Result<Sample, DomainError> {
    let bounds = SampleBounds::new(lower_bound, upper_bound)?;
    let mut rng = SeededRng::new(u64::from(seed));
    Ok(generate_with(seed, bounds, &mut rng))
}

/// Generates a sample by drawing from the supplied generator.
///
/// `seed` is only recorded on the result; the caller is responsible for
/// having seeded `rng` with it.
pub fn generate_with(seed: u32, bounds: SampleBounds, rng: &mut dyn DeterministicRng) -> Sample {
    let values: Vec<u32> = (0..SAMPLE_SIZE)
        .map(|_| {
            let value = rng.next_u32_range(bounds.lower(), bounds.upper() - 1);
            debug_assert!(
                bounds.contains(value),
                "drawn value {value} outside [{}, {})",
                bounds.lower(),
                bounds.upper()
            );
            value
        })
        .collect();
    let labels = (0..SAMPLE_SIZE).map(label_for).collect();

    Sample {
        seed,
        lower_bound: bounds.lower(),
        upper_bound: bounds.upper(),
        values,
        labels,
    }
}

impl Sample {
    /// The seed the values were drawn with.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Inclusive lower bound of every value.
    #[must_use]
    pub fn lower_bound(&self) -> u32 {
        self.lower_bound
    }

    /// Exclusive upper bound of every value.
    #[must_use]
    pub fn upper_bound(&self) -> u32 {
        self.upper_bound
    }

    /// Values in draw order.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Labels, positionally paired with [`Sample::values`].
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Largest value in the sample.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Iterates over `(label, value)` pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, u32)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Owned `(label, value)` rows.
    #[must_use]
    pub fn points(&self) -> Vec<SamplePoint> {
        self.pairs()
            .map(|(label, value)| SamplePoint {
                label: label.to_owned(),
                value,
            })
            .collect()
    }
}
