//! # eventscope feed
//!
//! Ingestion side of eventscope: produces the `Event` sequences the core
//! queries. Either the built-in mock flight log or an event file on disk.

pub mod error;
pub mod mock;
pub mod parse;

pub use error::FeedError;
pub use mock::flight_log;
pub use parse::{load_from_path, parse_str, FeedFormat};
