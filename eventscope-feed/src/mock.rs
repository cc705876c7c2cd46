//! ## eventscope-feed::mock
//! The hard-coded flight log used when no event file is given.

use eventscope_core::{Event, EventKind};

/// Eleven events from a short flight, deliberately out of time order.
pub fn flight_log() -> Vec<Event> {
    use EventKind::*;

    vec![
        Event::new(5.0, ActuatorCommand, "flaps", 15.0),
        Event::new(1.5, ControlInput, "pilot", 75.0),
        Event::new(10.5, ControlInput, "pilot", 85.0),
        Event::new(0.0, SensorReading, "engine1", 100.0),
        Event::new(3.2, SensorReading, "altimeter", 5000.0),
        Event::new(4.5, ControlInput, "pilot", 80.0),
        Event::new(9.2, SensorReading, "altimeter", 6000.0),
        Event::new(2.0, ActuatorCommand, "rudder", 30.0),
        Event::new(6.0, SensorReading, "engine2", 110.0),
        Event::new(7.5, ControlInput, "pilot", 70.0),
        Event::new(8.0, ActuatorCommand, "aileron", 20.0),
    ]
}
