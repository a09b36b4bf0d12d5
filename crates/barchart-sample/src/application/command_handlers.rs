//! Command handlers for the sample context.

use barchart_core::command::Command;
use barchart_core::error::DomainError;
use tracing::{debug, info};

use crate::application::query_handlers::SampleView;
use crate::domain::commands::GenerateSample;

/// Handles the `GenerateSample` command: validates the controls, draws a
/// fresh sample and returns it together with the selected color.
///
/// # Errors
///
/// Returns `DomainError::Validation` for out-of-range controls or
/// `DomainError::InvalidRange` for inverted bounds.
pub fn handle_generate_sample(command: &GenerateSample) -> Result<SampleView, DomainError> {
    let controls = &command.controls;
    debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        seed = controls.seed,
        min_value = controls.min_value,
        max_value = controls.max_value,
        "generating sample"
    );

    let sample = controls.sample()?;

    info!(
        correlation_id = %command.correlation_id(),
        max = sample.max_value(),
        "sample generated"
    );

    Ok(SampleView::new(sample, Some(controls.color)))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::controls::ChartControls;
    use crate::domain::palette::BarColor;
    use crate::domain::sample::generate;

    fn command(controls: ChartControls) -> GenerateSample {
        GenerateSample {
            correlation_id: Uuid::new_v4(),
            controls,
        }
    }

    #[test]
    fn test_handle_generate_sample_returns_view_with_color() {
        let controls = ChartControls {
            seed: 17,
            color: BarColor::Salmon,
            ..ChartControls::default()
        };

        let view = handle_generate_sample(&command(controls)).unwrap();

        assert_eq!(view.color, Some(BarColor::Salmon));
        assert_eq!(view.sample, generate(17, 1, 100).unwrap());
        assert_eq!(view.points.len(), 10);
    }

    #[test]
    fn test_handle_generate_sample_rejects_out_of_range_seed() {
        let controls = ChartControls {
            seed: 0,
            ..ChartControls::default()
        };

        let result = handle_generate_sample(&command(controls));

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_command_type_is_stable() {
        assert_eq!(
            command(ChartControls::default()).command_type(),
            "sample.generate"
        );
    }
}
