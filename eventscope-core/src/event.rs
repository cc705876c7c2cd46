//! ## eventscope-core::event
//! **The immutable event record**
//!
//! An `Event` is one discrete occurrence in a simulation run: a sensor
//! reading, a control input or an actuator command, stamped with the
//! simulation time at which it happened.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// Closed classification of what an event represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SensorReading,
    ControlInput,
    ActuatorCommand,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [EventKind; 3] = [
        EventKind::SensorReading,
        EventKind::ControlInput,
        EventKind::ActuatorCommand,
    ];

    /// Snake-case name, as used in event files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::SensorReading => "sensor_reading",
            EventKind::ControlInput => "control_input",
            EventKind::ActuatorCommand => "actuator_command",
        }
    }

    /// Numeric code of the kind (0, 1, 2), used by the plain-text listing.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = EventError;

    /// Case-insensitive; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| EventError::UnknownKind(s.to_string()))
    }
}

/// A single timestamped simulation event.
///
/// Fields are private so that an event cannot change once built; queries
/// produce new sequences instead of editing records. Two events may share
/// any or all field values, a timestamp is not an identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Seconds since the start of the simulation.
    timestamp: f64,

    kind: EventKind,

    /// Originating component or sensor, e.g. `engine1` or `rudder`.
    #[serde(default)]
    source: String,

    /// Magnitude whose unit depends on `kind` and `source` (throttle %, feet...).
    value: f64,
}

impl Event {
    #[inline]
    pub fn new(timestamp: f64, kind: EventKind, source: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp,
            kind,
            source: source.into(),
            value,
        }
    }

    #[inline]
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}
