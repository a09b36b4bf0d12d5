//! Application layer for sample generation.

pub mod command_handlers;
pub mod query_handlers;
