//! Shared application state.

use std::sync::Arc;

use crate::config::ServiceConfig;

/// Application state shared across all request handlers.
///
/// Holds configuration only; every request generates its own sample.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Arc<ServiceConfig>) -> Self {
        Self { config }
    }
}
