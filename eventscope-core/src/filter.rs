//! ## eventscope-core::filter
//! Order-preserving selection of events.

use tracing::instrument;

use crate::event::{Event, EventKind};

/// Copies every event matching `predicate`, in input order.
pub fn filter_events<P>(events: &[Event], predicate: P) -> Vec<Event>
where
    P: Fn(&Event) -> bool,
{
    events.iter().filter(|&e| predicate(e)).cloned().collect()
}

#[instrument(level = "trace", skip(events), fields(len = events.len()))]
pub fn filter_by_kind(events: &[Event], kind: EventKind) -> Vec<Event> {
    filter_events(events, |e| e.kind() == kind)
}

/// Exact string match on `source`: no trimming, no case folding.
#[instrument(level = "trace", skip(events), fields(len = events.len()))]
pub fn filter_by_source(events: &[Event], source: &str) -> Vec<Event> {
    filter_events(events, |e| e.source() == source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        events_strategy, five_event_scenario, kind_strategy, source_strategy, with_positional_values,
    };
    use proptest::prelude::*;

    #[test]
    fn source_filter_keeps_input_order() {
        let pilot = filter_by_source(&five_event_scenario(), "pilot");
        let values: Vec<f64> = pilot.iter().map(Event::value).collect();
        assert_eq!(values, vec![75.0, 85.0]);
    }

    #[test]
    fn source_match_is_case_sensitive() {
        assert!(filter_by_source(&five_event_scenario(), "Pilot").is_empty());
        assert!(filter_by_source(&five_event_scenario(), " pilot").is_empty());
    }

    #[test]
    fn empty_source_only_matches_empty() {
        let events = vec![
            Event::new(0.0, EventKind::SensorReading, "", 1.0),
            Event::new(1.0, EventKind::SensorReading, "engine1", 2.0),
            Event::new(2.0, EventKind::SensorReading, "", 3.0),
        ];
        let unnamed: Vec<f64> = filter_by_source(&events, "").iter().map(Event::value).collect();
        assert_eq!(unnamed, vec![1.0, 3.0]);
    }

    #[test]
    fn kind_filter() {
        let sensors = filter_by_kind(&five_event_scenario(), EventKind::SensorReading);
        let sources: Vec<&str> = sensors.iter().map(Event::source).collect();
        assert_eq!(sources, vec!["engine1", "altimeter"]);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let events = vec![Event::new(1.0, EventKind::SensorReading, "engine1", 1.0)];
        assert!(filter_by_kind(&events, EventKind::ActuatorCommand).is_empty());
        assert!(filter_by_source(&[], "engine1").is_empty());
    }

    proptest! {
        #[test]
        fn filtered_events_match_and_keep_order(raw in events_strategy(), kind in kind_strategy()) {
            let events = with_positional_values(&raw);
            let filtered = filter_by_kind(&events, kind);

            prop_assert!(filtered.len() <= events.len());
            prop_assert!(filtered.iter().all(|e| e.kind() == kind));
            prop_assert!(filtered.windows(2).all(|w| w[0].value() < w[1].value()));
            prop_assert_eq!(
                filtered.len(),
                events.iter().filter(|e| e.kind() == kind).count()
            );
        }

        #[test]
        fn source_filter_is_exact_and_keeps_order(raw in events_strategy(), source in source_strategy()) {
            let events = with_positional_values(&raw);
            let filtered = filter_by_source(&events, source);

            prop_assert!(filtered.len() <= events.len());
            prop_assert!(filtered.iter().all(|e| e.source() == source));
            prop_assert!(filtered.windows(2).all(|w| w[0].value() < w[1].value()));

            let expected: Vec<Event> = events.iter().filter(|e| e.source() == source).cloned().collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
