//! Random bar chart — presentation.
//!
//! Draws a sample as an SVG bar chart and assembles the HTML page that hosts
//! the sidebar controls, the chart, the raw-data table and the CSV link.

pub mod chart;
pub mod error;
pub mod html;
pub mod page;

pub use error::RenderError;
