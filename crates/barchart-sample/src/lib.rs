//! Random bar chart — sample generation.
//!
//! Responsible for turning a seed and a value range into the ten labelled
//! values a chart displays, validating control-surface input, and
//! serializing samples for CSV export.

pub mod application;
pub mod domain;
