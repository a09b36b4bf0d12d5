//! Shared test doubles for the random bar chart service.

mod rng;

pub use rng::{MockRng, RecordingRng, SequenceRng};
