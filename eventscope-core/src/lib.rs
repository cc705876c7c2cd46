//! # eventscope-core
//!
//! In-memory query and aggregation over timestamped simulation events.
//!
//! Every query borrows a caller-owned `&[Event]` and hands back an owned
//! result (a new vector, a map of groups, a sum) or a borrow bounded by the
//! input slice. Nothing here keeps state between calls.
//!
//! ### Key Submodules:
//! - `event`: the immutable `Event` record and its `EventKind`
//! - `sort`: stable sort by timestamp or any projected key
//! - `filter`: order-preserving filters by kind, source or predicate
//! - `group`: partitions keyed by kind, source or any `Ord` key
//! - `aggregate`: conditional sums, means and value summaries
//! - `search`: first event strictly after a time threshold

pub mod aggregate;
pub mod error;
pub mod event;
pub mod filter;
pub mod group;
pub mod search;
pub mod sort;

#[cfg(test)]
pub(crate) mod testing;

pub mod prelude {
    pub use crate::aggregate::*;
    pub use crate::error::*;
    pub use crate::event::*;
    pub use crate::filter::*;
    pub use crate::group::*;
    pub use crate::search::*;
    pub use crate::sort::*;
}

pub use error::EventError;
pub use event::{Event, EventKind};
pub use sort::SortOrder;
