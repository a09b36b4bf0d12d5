//! The HTML control surface: sidebar controls, chart, raw-data table and
//! CSV download link on a single page.

use std::fmt::Write as _;

use barchart_sample::domain::controls::{
    ChartControls, MAX_VALUE_RANGE, MIN_VALUE_RANGE, SEED_RANGE,
};
use barchart_sample::domain::palette::BarColor;
use barchart_sample::domain::sample::Sample;

use crate::html::escape;

/// Page heading and document title.
pub const PAGE_TITLE: &str = "Random Bar Chart Generator";
/// Line shown under the heading.
pub const PAGE_DESCRIPTION: &str = "This app displays a bar chart with 10 random values.";

const PAGE_CSS: &str = r#"
:root {
  --bg: #ffffff;
  --sidebar: #f0f2f6;
  --text: #31333f;
  --text-muted: #6b6f7b;
  --accent: #ff4b4b;
  --border: rgba(49, 51, 63, 0.2);
  --error-bg: #ffecec;
  --error-text: #7d1a1a;
  --radius: 8px;
  --font-body: "Source Sans Pro", system-ui, -apple-system, sans-serif;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: var(--font-body); color: var(--text); background: var(--bg); }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 300px; padding: 24px; background: var(--sidebar); }
.sidebar h2 { margin-top: 0; font-size: 20px; }
.sidebar label { display: block; margin: 16px 0 6px; font-size: 14px; }
.sidebar input[type=number], .sidebar select {
  width: 100%; padding: 8px; border: 1px solid var(--border); border-radius: var(--radius);
}
.sidebar .toggle { display: flex; gap: 8px; align-items: center; }
.sidebar button {
  margin-top: 20px; width: 100%; padding: 10px; border: 1px solid var(--border);
  border-radius: var(--radius); background: var(--bg); cursor: pointer;
}
.sidebar button:hover { border-color: var(--accent); color: var(--accent); }
main { flex: 1; padding: 32px 48px; max-width: 1100px; }
.chart svg { max-width: 100%; height: auto; }
.error { padding: 16px; border-radius: var(--radius); background: var(--error-bg); color: var(--error-text); }
table.raw { border-collapse: collapse; margin: 16px 0; }
table.raw th, table.raw td { padding: 4px 16px; border: 1px solid var(--border); text-align: left; }
a.download {
  display: inline-block; margin-top: 16px; padding: 8px 14px; border: 1px solid var(--border);
  border-radius: var(--radius); color: var(--text); text-decoration: none;
}
footer { margin-top: 40px; color: var(--text-muted); }
"#;

/// Resubmits the sidebar form whenever a control changes, so the chart is
/// regenerated without pressing the button.
const ON_CHANGE: &str = r#"onchange="this.form.submit()""#;

/// What the main column shows.
#[derive(Debug, Clone, Copy)]
pub enum PageBody<'a> {
    /// A generated sample and its rendered chart.
    Chart {
        /// The sample behind the chart and table.
        sample: &'a Sample,
        /// Inline SVG document.
        svg: &'a str,
    },
    /// An error message for the user to act on.
    Error {
        /// Text shown in the error banner.
        message: &'a str,
    },
}

/// Everything needed to render the page.
#[derive(Debug, Clone, Copy)]
pub struct PageModel<'a> {
    /// Current control values, echoed back into the sidebar.
    pub controls: &'a ChartControls,
    /// Main column content.
    pub body: PageBody<'a>,
    /// Path of the CSV export route.
    pub export_path: &'a str,
    /// Link shown in the footer.
    pub source_url: &'a str,
}

fn number_input(out: &mut String, name: &str, label: &str, value: u32, min: u32, max: u32) {
    let _ = write!(
        out,
        r#"<label for="{name}">{label}</label><input type="number" id="{name}" name="{name}" value="{value}" min="{min}" max="{max}" step="1" required {ON_CHANGE}>"#
    );
}

fn sidebar(out: &mut String, controls: &ChartControls) {
    out.push_str(r#"<aside class="sidebar"><h2>Chart Controls</h2><form method="get" action="/">"#);
    number_input(
        out,
        "seed",
        "Random Seed",
        controls.seed,
        *SEED_RANGE.start(),
        *SEED_RANGE.end(),
    );
    number_input(
        out,
        "min_value",
        "Minimum Value",
        controls.min_value,
        *MIN_VALUE_RANGE.start(),
        *MIN_VALUE_RANGE.end(),
    );
    number_input(
        out,
        "max_value",
        "Maximum Value",
        controls.max_value,
        *MAX_VALUE_RANGE.start(),
        *MAX_VALUE_RANGE.end(),
    );

    let _ = write!(
        out,
        r#"<label for="color">Bar Color</label><select id="color" name="color" {ON_CHANGE}>"#
    );
    for color in BarColor::ALL {
        let selected = if color == controls.color { " selected" } else { "" };
        let _ = write!(out, r#"<option value="{color}"{selected}>{color}</option>"#);
    }
    out.push_str("</select>");

    let checked = if controls.show_raw_data { " checked" } else { "" };
    let _ = write!(
        out,
        r#"<label class="toggle"><input type="checkbox" name="show_raw_data" value="true"{checked} {ON_CHANGE}> Show Raw Data</label>"#
    );
    out.push_str(r#"<button type="submit">Generate New Chart</button></form></aside>"#);
}

fn raw_table(out: &mut String, sample: &Sample) {
    out.push_str(r#"<table class="raw"><thead><tr><th>Category</th><th>Value</th></tr></thead><tbody>"#);
    for (label, value) in sample.pairs() {
        let _ = write!(out, "<tr><td>{}</td><td>{value}</td></tr>", escape(label));
    }
    out.push_str("</tbody></table>");
}

/// Renders the complete HTML document.
#[must_use]
pub fn render_page(model: &PageModel<'_>) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let _ = write!(
        out,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{PAGE_TITLE}</title><style>{PAGE_CSS}</style></head><body><div class="layout">"#
    );

    sidebar(&mut out, model.controls);

    let _ = write!(out, "<main><h1>{PAGE_TITLE}</h1><p>{PAGE_DESCRIPTION}</p>");

    match model.body {
        PageBody::Chart { sample, svg } => {
            if model.controls.show_raw_data {
                raw_table(&mut out, sample);
            }
            let _ = write!(out, r#"<div class="chart">{svg}</div>"#);
            let href = format!("{}?{}", model.export_path, model.controls.to_query());
            let _ = write!(
                out,
                r#"<a class="download" href="{}" download>Download data as CSV</a>"#,
                escape(&href)
            );
        }
        PageBody::Error { message } => {
            let _ = write!(out, r#"<div class="error" role="alert">{}</div>"#, escape(message));
        }
    }

    let _ = write!(
        out,
        r#"<footer><hr><p>Code available on <a href="{url}">GitHub</a></p></footer></main></div></body></html>"#,
        url = escape(model.source_url)
    );
    out
}
