//! Shared fixtures and proptest strategies for the query tests.

use proptest::prelude::*;

use crate::event::{Event, EventKind};

/// Five events from the flight log, in their original (unsorted) order.
pub fn five_event_scenario() -> Vec<Event> {
    vec![
        Event::new(5.0, EventKind::ActuatorCommand, "flaps", 15.0),
        Event::new(1.5, EventKind::ControlInput, "pilot", 75.0),
        Event::new(10.5, EventKind::ControlInput, "pilot", 85.0),
        Event::new(0.0, EventKind::SensorReading, "engine1", 100.0),
        Event::new(3.2, EventKind::SensorReading, "altimeter", 5000.0),
    ]
}

pub fn kind_strategy() -> impl Strategy<Value = EventKind> {
    prop::sample::select(EventKind::ALL.to_vec())
}

/// Sources used by `event_strategy`, plus names that never occur.
pub fn source_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["pilot", "flaps", "engine1", "altimeter", "", "Pilot", "rudder"])
}

/// Small pools of timestamps and sources so that ties and shared keys are common.
pub fn event_strategy() -> impl Strategy<Value = Event> {
    (
        prop::sample::select(vec![0.0, 0.5, 1.5, 2.0, 3.2, 5.0, 10.5]),
        kind_strategy(),
        prop::sample::select(vec!["pilot", "flaps", "engine1", "altimeter", ""]),
        -1000.0f64..1000.0,
    )
        .prop_map(|(timestamp, kind, source, value)| Event::new(timestamp, kind, source, value))
}

pub fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(event_strategy(), 0..40)
}

/// Replaces every value with the event's input position, so tests can tell
/// otherwise identical events apart after a reorder.
pub fn with_positional_values(events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .enumerate()
        .map(|(i, e)| Event::new(e.timestamp(), e.kind(), e.source(), i as f64))
        .collect()
}
