//! Barchart Core — shared abstractions.
//!
//! This crate defines the traits and types that the sample, render and API
//! crates depend on. It contains no HTTP or rendering code.

pub mod command;
pub mod error;
pub mod rng;
