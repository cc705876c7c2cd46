//! # eventscope telemetry
//!
//! Crate for logging setup shared by the eventscope binaries.

pub mod logging;

pub use logging::EventLogger;
