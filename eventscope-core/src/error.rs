use thiserror::Error;

/// Errors raised when turning text into core values.
///
/// Queries themselves never fail: an empty or unmatched input is a normal
/// outcome (empty vector, empty map, zero sum, `None`).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Unknown event kind: {0:?} (expected sensor_reading, control_input or actuator_command)")]
    UnknownKind(String),

    #[error("Unknown sort order: {0:?} (expected ascending or descending)")]
    UnknownOrder(String),
}
