//! Commands issued by the control surface.

use uuid::Uuid;

/// An instruction from the control surface to recompute what it displays.
///
/// Every command carries a correlation ID so the log lines emitted while it
/// is handled can be tied back to the request that issued it.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted name used in log fields, e.g. `sample.generate`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID assigned when the request was received.
    fn correlation_id(&self) -> Uuid;
}
