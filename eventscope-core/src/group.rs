//! ## eventscope-core::group
//! **Partitioning events by a key**
//!
//! Groups are returned in a `BTreeMap` so that iterating over the observed
//! keys is deterministic. Only keys that occur in the input get an entry,
//! and within a group events keep their input order.

use std::collections::BTreeMap;

use tracing::instrument;

use crate::event::{Event, EventKind};

/// Partitions `events` by the key that `key_fn` extracts from each one.
///
/// Every event lands in exactly one group; concatenating the groups gives
/// back the input multiset.
pub fn group_by<K, F>(events: &[Event], key_fn: F) -> BTreeMap<K, Vec<Event>>
where
    K: Ord,
    F: Fn(&Event) -> K,
{
    let mut groups: BTreeMap<K, Vec<Event>> = BTreeMap::new();
    for event in events {
        groups.entry(key_fn(event)).or_default().push(event.clone());
    }
    groups
}

#[instrument(level = "trace", skip(events), fields(len = events.len()))]
pub fn group_by_kind(events: &[Event]) -> BTreeMap<EventKind, Vec<Event>> {
    group_by(events, Event::kind)
}

#[instrument(level = "trace", skip(events), fields(len = events.len()))]
pub fn group_by_source(events: &[Event]) -> BTreeMap<String, Vec<Event>> {
    group_by(events, |e| e.source().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{events_strategy, five_event_scenario, with_positional_values};
    use proptest::prelude::*;

    #[test]
    fn groups_by_source() {
        let groups = group_by_source(&five_event_scenario());
        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["altimeter", "engine1", "flaps", "pilot"]);

        let pilot: Vec<f64> = groups["pilot"].iter().map(Event::timestamp).collect();
        assert_eq!(pilot, vec![1.5, 10.5]);
    }

    #[test]
    fn only_observed_kinds_are_keys() {
        let events = vec![
            Event::new(0.0, EventKind::ControlInput, "pilot", 1.0),
            Event::new(1.0, EventKind::ControlInput, "pilot", 2.0),
        ];
        let groups = group_by_kind(&events);
        assert_eq!(groups.len(), 1);
        assert!(!groups.contains_key(&EventKind::SensorReading));
        assert_eq!(groups[&EventKind::ControlInput].len(), 2);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(group_by_kind(&[]).is_empty());
        assert!(group_by_source(&[]).is_empty());
    }

    #[test]
    fn empty_source_forms_its_own_group() {
        let events = vec![
            Event::new(0.0, EventKind::SensorReading, "", 1.0),
            Event::new(1.0, EventKind::SensorReading, "engine1", 2.0),
        ];
        let groups = group_by_source(&events);
        assert_eq!(groups[""].len(), 1);
        assert_eq!(groups["engine1"].len(), 1);
    }

    proptest! {
        #[test]
        fn source_groups_partition_input(raw in events_strategy()) {
            let events = with_positional_values(&raw);
            let groups = group_by_source(&events);

            let mut seen = Vec::new();
            for (source, members) in &groups {
                prop_assert!(!members.is_empty());
                prop_assert!(members.iter().all(|e| e.source() == source));
                prop_assert!(members.windows(2).all(|w| w[0].value() < w[1].value()));
                seen.extend(members.iter().map(|e| e.value() as usize));
            }
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..events.len()).collect::<Vec<_>>());
        }

        #[test]
        fn kind_groups_partition_input(events in events_strategy()) {
            let groups = group_by_kind(&events);
            let total: usize = groups.values().map(Vec::len).sum();
            prop_assert_eq!(total, events.len());
            for (kind, members) in &groups {
                prop_assert!(members.iter().all(|e| e.kind() == *kind));
            }
        }
    }
}
