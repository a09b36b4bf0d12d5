//! Domain layer for sample generation.

pub mod commands;
pub mod controls;
pub mod csv;
pub mod palette;
pub mod sample;
