//! Query handlers for the sample context.
//!
//! Each handler builds a fresh sample from its inputs and returns a
//! read-only view or an export document.

use barchart_core::error::DomainError;
use serde::Serialize;

use crate::domain::controls::ChartControls;
use crate::domain::csv::{self, CSV_FILE_NAME, CSV_MIME_TYPE};
use crate::domain::palette::BarColor;
use crate::domain::sample::{self, Sample, SamplePoint};

/// Read-only view of a generated sample.
#[derive(Debug, Serialize)]
pub struct SampleView {
    /// Seed, bounds, values and labels.
    #[serde(flatten)]
    pub sample: Sample,
    /// `(label, value)` rows, as shown in the raw-data table.
    pub points: Vec<SamplePoint>,
    /// Bar color, when the request came from the control surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<BarColor>,
}

impl SampleView {
    /// Wraps a sample for output.
    #[must_use]
    pub fn new(sample: Sample, color: Option<BarColor>) -> Self {
        let points = sample.points();
        Self {
            sample,
            points,
            color,
        }
    }
}

/// A CSV document ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested file name.
    pub file_name: &'static str,
    /// MIME type of `body`.
    pub mime_type: &'static str,
    /// The CSV text.
    pub body: String,
}

/// Generates a sample straight from a seed and bounds.
///
/// Only the generator's own range check applies; widget constraints do not.
///
/// # Errors
///
/// Returns `DomainError::InvalidRange` if `upper_bound <= lower_bound`.
pub fn get_sample(
    seed: u32,
    lower_bound: u32,
    upper_bound: u32,
) -> Result<SampleView, DomainError> {
    let sample = sample::generate(seed, lower_bound, upper_bound)?;
    Ok(SampleView::new(sample, None))
}

/// Builds the CSV export for the sample the controls describe.
///
/// # Errors
///
/// Returns `DomainError` if the controls fail validation.
pub fn export_csv(controls: &ChartControls) -> Result<CsvExport, DomainError> {
    let sample = controls.sample()?;
    Ok(CsvExport {
        file_name: CSV_FILE_NAME,
        mime_type: CSV_MIME_TYPE,
        body: csv::to_csv(&sample),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_sample_has_no_color() {
        let view = get_sample(42, 1, 100).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert!(json.get("color").is_none());
        assert_eq!(json["seed"], 42);
        assert_eq!(json["points"][0]["label"], "Item 1");
    }

    #[test]
    fn test_get_sample_ignores_widget_limits() {
        let view = get_sample(5000, 300, 400).unwrap();
        assert!(view.sample.values().iter().all(|v| (300..400).contains(v)));
    }

    #[test]
    fn test_get_sample_propagates_invalid_range() {
        assert!(matches!(
            get_sample(1, 100, 50),
            Err(DomainError::InvalidRange {
                lower: 100,
                upper: 50
            })
        ));
    }

    #[test]
    fn test_export_csv_metadata() {
        let export = export_csv(&ChartControls::default()).unwrap();

        assert_eq!(export.file_name, "random_bar_data.csv");
        assert_eq!(export.mime_type, "text/csv");
        assert!(export.body.starts_with("Category,Value\n"));
    }

    #[test]
    fn test_export_csv_parses_back_to_the_sample() {
        let controls = ChartControls {
            seed: 314,
            min_value: 20,
            max_value: 150,
            ..ChartControls::default()
        };

        let export = export_csv(&controls).unwrap();
        let rows = csv::parse_csv(&export.body).unwrap();

        assert_eq!(rows, controls.sample().unwrap().points());
    }
}
