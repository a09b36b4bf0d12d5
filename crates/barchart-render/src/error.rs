//! Rendering error types.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors raised while drawing a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The plotting backend failed to draw.
    #[error("chart drawing failed: {0}")]
    Draw(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Draw(err.to_string())
    }
}
