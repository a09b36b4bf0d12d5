//! SVG bar chart rendering.

use barchart_sample::domain::palette::BarColor;
use barchart_sample::domain::sample::Sample;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::error::RenderError;

/// Chart width in pixels.
pub const CHART_WIDTH: u32 = 1000;
/// Chart height in pixels.
pub const CHART_HEIGHT: u32 = 600;
/// Title drawn above the bars.
pub const CHART_TITLE: &str = "Bar Chart with 10 Random Entries";

const FONT: &str = "sans-serif";

/// Top of the y axis: the tallest bar plus room for its annotation.
fn y_axis_max(sample: &Sample) -> u32 {
    let max = sample.max_value();
    max + max / 10 + 3
}

/// Renders `sample` as an SVG document with bars filled in `color`.
///
/// # Errors
///
/// Returns `RenderError::Draw` if the plotting backend fails.
pub fn render_svg(sample: &Sample, color: BarColor) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let bar_count = u32::try_from(sample.values().len())
            .map_err(|e| RenderError::Draw(format!("too many bars: {e}")))?;
        let y_max = y_axis_max(sample);

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, (FONT, 28))
            .margin(20)
            .x_label_area_size(90)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..bar_count).into_segmented(), 0u32..y_max)?;

        let labels = sample.labels();
        let label_formatter = |v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) => labels
                .get(*i as usize)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(BLACK.mix(0.2))
            .light_line_style(WHITE)
            .x_labels(labels.len() * 2)
            .x_label_formatter(&label_formatter)
            .x_label_style((FONT, 14).into_font().transform(FontTransform::Rotate90))
            .x_desc("Categories")
            .y_desc("Values")
            .axis_desc_style((FONT, 16))
            .draw()?;

        let (r, g, b) = color.rgb();
        let fill = RGBColor(r, g, b).filled();
        chart.draw_series(sample.values().iter().zip(0u32..).map(|(v, i)| {
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), *v)],
                fill,
            );
            bar.set_margin(0, 0, 8, 8);
            bar
        }))?;

        let annotation = (FONT, 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(sample.values().iter().zip(0u32..).map(|(v, i)| {
            Text::new(
                v.to_string(),
                (SegmentValue::CenterOf(i), v + 1),
                annotation.clone(),
            )
        }))?;

        root.present()?;
    }

    debug!(seed = sample.seed(), %color, bytes = svg.len(), "chart rendered");
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use barchart_sample::domain::sample::{SampleBounds, generate, generate_with};
    use barchart_test_support::SequenceRng;

    fn fixed_sample() -> Sample {
        let mut rng = SequenceRng::new(vec![11, 22, 33, 44, 55, 66, 77, 88, 97, 12]);
        generate_with(1, SampleBounds::new(1, 100).unwrap(), &mut rng)
    }

    #[test]
    fn test_render_svg_produces_svg_document() {
        let svg = render_svg(&fixed_sample(), BarColor::SkyBlue).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_svg_includes_title_and_axis_labels() {
        let svg = render_svg(&fixed_sample(), BarColor::SkyBlue).unwrap();

        assert!(svg.contains(CHART_TITLE));
        assert!(svg.contains("Categories"));
        assert!(svg.contains("Values"));
    }

    /// Trimmed contents of every `<text>` element, in document order.
    fn text_nodes(svg: &str) -> Vec<&str> {
        svg.split("</text>")
            .filter_map(|chunk| chunk.rfind('>').map(|at| chunk[at + 1..].trim()))
            .filter(|text| !text.is_empty())
            .collect()
    }

    #[test]
    fn test_render_svg_labels_every_bar() {
        let svg = render_svg(&fixed_sample(), BarColor::Gold).unwrap();
        let texts = text_nodes(&svg);

        for i in 1..=10 {
            let label = format!("Item {i}");
            assert!(texts.contains(&label.as_str()), "missing {label}");
        }
        for value in ["11", "55", "97", "12"] {
            assert!(texts.contains(&value), "missing annotation {value}");
        }
    }

    #[test]
    fn test_render_svg_is_byte_identical_for_same_input() {
        let sample = generate(123, 5, 150).unwrap();

        let first = render_svg(&sample, BarColor::Violet).unwrap();
        let second = render_svg(&sample, BarColor::Violet).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_svg_draws_bars_left_to_right() {
        let svg = render_svg(&fixed_sample(), BarColor::SkyBlue).unwrap();
        let bar_xs: Vec<u32> = svg
            .lines()
            .filter(|line| line.contains("<rect") && line.to_ascii_uppercase().contains("#87CEEB"))
            .filter_map(|line| {
                let start = line.find("x=\"")? + 3;
                let end = start + line[start..].find('"')?;
                line[start..end].parse().ok()
            })
            .collect();

        assert_eq!(bar_xs.len(), 10);
        assert!(bar_xs.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_render_svg_fills_bars_with_selected_color() {
        let sample = fixed_sample();

        let salmon = render_svg(&sample, BarColor::Salmon).unwrap().to_ascii_uppercase();
        assert!(salmon.contains("#FA8072"));
        assert!(!salmon.contains("#87CEEB"));
    }

    #[test]
    fn test_y_axis_leaves_room_for_annotations() {
        let sample = generate(5, 99, 100).unwrap();
        assert!(y_axis_max(&sample) > sample.max_value() + 1);
    }
}
