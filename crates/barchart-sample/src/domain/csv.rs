//! CSV export of a sample and parsing of the exported document.
//!
//! The layout is a `Category,Value` header followed by one `label,value` row
//! per bar, newline terminated, with no index column.

use std::fmt::Write as _;

use barchart_core::error::DomainError;

use super::sample::{Sample, SamplePoint};

/// Header row of every export.
pub const CSV_HEADER: &str = "Category,Value";
/// File name offered for the download.
pub const CSV_FILE_NAME: &str = "random_bar_data.csv";
/// MIME type of the download.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Serializes `sample` as CSV.
#[must_use]
pub fn to_csv(sample: &Sample) -> String {
    let mut out = String::with_capacity(16 * (sample.values().len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for (label, value) in sample.pairs() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{label},{value}");
    }
    out
}

/// Parses a document produced by [`to_csv`] back into its rows.
///
/// Accepts both `\n` and `\r\n` line endings and ignores a trailing newline.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the header is missing or wrong, a
/// row does not have exactly two fields, or a value is not an unsigned
/// integer.
pub fn parse_csv(input: &str) -> Result<Vec<SamplePoint>, DomainError> {
    let mut lines = input.lines();

    match lines.next() {
        Some(header) if header.trim_end() == CSV_HEADER => {}
        Some(other) => {
            return Err(DomainError::Validation(format!(
                "expected CSV header `{CSV_HEADER}`, found `{other}`"
            )));
        }
        None => return Err(DomainError::Validation("CSV document is empty".into())),
    }

    lines
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_row(index + 2, line.trim_end()))
        .collect()
}

fn parse_row(line_number: usize, line: &str) -> Result<SamplePoint, DomainError> {
    let fields: Vec<&str> = line.split(',').collect();
    let [label, value] = fields.as_slice() else {
        return Err(DomainError::Validation(format!(
            "line {line_number}: expected 2 fields, found {}",
            fields.len()
        )));
    };

    let value = value.trim().parse::<u32>().map_err(|e| {
        DomainError::Validation(format!("line {line_number}: invalid value `{value}`: {e}"))
    })?;

    Ok(SamplePoint {
        label: (*label).to_owned(),
        value,
    })
}
