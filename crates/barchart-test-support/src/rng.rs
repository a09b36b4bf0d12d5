//! Test RNG — scripted `DeterministicRng` implementations for tests.

use barchart_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` from `next_u32_range`. Suitable for
/// tests that only care about shape, not values.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// An RNG that returns values from a predetermined sequence, ignoring the
/// requested range. Panics if the sequence is exhausted.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}

/// An RNG that remembers every inclusive range it was asked for and answers
/// with the upper end of it.
#[derive(Debug, Default)]
pub struct RecordingRng {
    requests: Vec<(u32, u32)>,
}

impl RecordingRng {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The `(min, max)` pairs received, in call order.
    #[must_use]
    pub fn requests(&self) -> &[(u32, u32)] {
        &self.requests
    }
}

impl DeterministicRng for RecordingRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        self.requests.push((min, max));
        max
    }
}
