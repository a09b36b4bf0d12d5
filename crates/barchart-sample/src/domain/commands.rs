//! Commands for the sample context.

use barchart_core::command::Command;
use uuid::Uuid;

use super::controls::ChartControls;

/// Command to regenerate the chart from the current control values.
#[derive(Debug, Clone)]
pub struct GenerateSample {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Control values at the moment the command was issued.
    pub controls: ChartControls,
}

impl Command for GenerateSample {
    fn command_type(&self) -> &'static str {
        "sample.generate"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
