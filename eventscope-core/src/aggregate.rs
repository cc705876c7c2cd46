//! ## eventscope-core::aggregate
//! **Accumulation over event values**
//!
//! Sums start from `0.0` and fold in input order, so repeated runs over the
//! same sequence round identically. Means are `None` rather than NaN when
//! nothing matches.

use std::collections::BTreeMap;

use tracing::instrument;

use crate::event::{Event, EventKind};
use crate::group::group_by_source;

/// Sum of `value` over the events matching `predicate`; `0.0` when none match.
pub fn sum_value_where<P>(events: &[Event], predicate: P) -> f64
where
    P: Fn(&Event) -> bool,
{
    events
        .iter()
        .fold(0.0, |sum, e| if predicate(e) { sum + e.value() } else { sum })
}

#[instrument(level = "trace", skip(events), fields(len = events.len()))]
pub fn sum_value_by_source(events: &[Event], source: &str) -> f64 {
    sum_value_where(events, |e| e.source() == source)
}

#[instrument(level = "trace", skip(events), fields(len = events.len()))]
pub fn sum_value_by_kind(events: &[Event], kind: EventKind) -> f64 {
    sum_value_where(events, |e| e.kind() == kind)
}

pub fn count_where<P>(events: &[Event], predicate: P) -> usize
where
    P: Fn(&Event) -> bool,
{
    events.iter().filter(|&e| predicate(e)).count()
}

/// Arithmetic mean of `value` over matching events, `None` if there are none.
pub fn mean_value_where<P>(events: &[Event], predicate: P) -> Option<f64>
where
    P: Fn(&Event) -> bool,
{
    summarize_where(events, predicate).mean()
}

pub fn mean_value_by_source(events: &[Event], source: &str) -> Option<f64> {
    mean_value_where(events, |e| e.source() == source)
}

pub fn mean_value_by_kind(events: &[Event], kind: EventKind) -> Option<f64> {
    mean_value_where(events, |e| e.kind() == kind)
}

/// Running statistics over a set of event values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueSummary {
    pub count: usize,
    pub total: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValueSummary {
    pub fn record(&mut self, value: f64) {
        self.count += 1;
        self.total += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total / self.count as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

pub fn summarize_where<P>(events: &[Event], predicate: P) -> ValueSummary
where
    P: Fn(&Event) -> bool,
{
    let mut summary = ValueSummary::default();
    for event in events.iter().filter(|&e| predicate(e)) {
        summary.record(event.value());
    }
    summary
}

pub fn summarize(events: &[Event]) -> ValueSummary {
    summarize_where(events, |_| true)
}

/// One summary per observed source, keyed like [`group_by_source`].
#[instrument(level = "trace", skip(events), fields(len = events.len()))]
pub fn summarize_by_source(events: &[Event]) -> BTreeMap<String, ValueSummary> {
    group_by_source(events)
        .into_iter()
        .map(|(source, members)| (source, summarize(&members)))
        .collect()
}
