//! Route modules.

pub mod health;
pub mod page;
pub mod samples;
