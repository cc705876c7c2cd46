//! ## eventscope-core::search
//! Threshold lookups over the input order.
//!
//! These scans never sort. A caller that wants the earliest event in time
//! after a threshold sorts first (see `sort::sort_by_time`) and pays that
//! cost explicitly.

use tracing::instrument;

use crate::event::Event;

/// Index of the first event, in input order, whose timestamp is strictly greater than `threshold`.
pub fn position_after(events: &[Event], threshold: f64) -> Option<usize> {
    events.iter().position(|e| e.timestamp() > threshold)
}

/// First event, in input order, whose timestamp is strictly greater than `threshold`.
///
/// An event stamped exactly at `threshold` does not qualify.
#[instrument(level = "trace", skip(events), fields(len = events.len()))]
pub fn first_after(events: &[Event], threshold: f64) -> Option<&Event> {
    position_after(events, threshold).map(|i| &events[i])
}
