//! ## eventscope-core::sort
//! **Stable ordering of events by timestamp or any projected key**
//!
//! The copying functions (`sort_by_time`, `sorted_by_key`) are the default
//! entry points. The `*_in_place` variants reorder the caller's slice and are
//! kept under separate names so that mutation is always explicit.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::instrument;

use crate::error::EventError;
use crate::event::{Event, EventKind};

/// Direction of a sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("ascending"),
            SortOrder::Descending => f.write_str("descending"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(EventError::UnknownOrder(s.to_string())),
        }
    }
}

/// A key with a total order, as returned by a sort projection.
///
/// `f64` uses `total_cmp`, so NaN sorts after `+inf` when ascending instead
/// of breaking the comparator.
pub trait SortKey {
    fn key_cmp(&self, other: &Self) -> Ordering;
}

impl SortKey for f64 {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl SortKey for EventKind {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl SortKey for String {
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl<A: SortKey, B: SortKey> SortKey for (A, B) {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.0.key_cmp(&other.0).then_with(|| self.1.key_cmp(&other.1))
    }
}

/// Returns a copy of `events` ordered by `projection`, leaving the input untouched.
///
/// The sort is stable in both directions: events whose keys compare equal
/// keep their input order.
pub fn sorted_by_key<K, F>(events: &[Event], order: SortOrder, projection: F) -> Vec<Event>
where
    K: SortKey,
    F: Fn(&Event) -> K,
{
    let mut sorted = events.to_vec();
    sort_by_key_in_place(&mut sorted, order, projection);
    sorted
}

/// Reorders `events` by `projection` in place.
///
/// This mutates caller-owned data. Any other reader of the same sequence
/// sees the new order; the `&mut` borrow is the only guard.
pub fn sort_by_key_in_place<K, F>(events: &mut [Event], order: SortOrder, projection: F)
where
    K: SortKey,
    F: Fn(&Event) -> K,
{
    events.sort_by(|a, b| order.apply(projection(a).key_cmp(&projection(b))));
}

/// Returns a copy of `events` sorted by timestamp.
#[instrument(level = "trace", skip(events), fields(len = events.len()))]
pub fn sort_by_time(events: &[Event], order: SortOrder) -> Vec<Event> {
    sorted_by_key(events, order, Event::timestamp)
}

/// Sorts `events` by timestamp in place. See [`sort_by_key_in_place`] for the aliasing caveat.
#[instrument(level = "trace", skip(events), fields(len = events.len()))]
pub fn sort_by_time_in_place(events: &mut [Event], order: SortOrder) {
    sort_by_key_in_place(events, order, Event::timestamp);
}
