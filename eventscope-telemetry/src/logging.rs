//! ## eventscope-telemetry::logging
//! **Structured logging with `tracing`**
//!
//! `RUST_LOG` wins over the configured level when it is set, so a single
//! run can be made more verbose without touching configuration files.

use tracing::info_span;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when the configured level is not a valid filter directive.
const FALLBACK_LEVEL: &str = "warn";

#[derive(Clone, Debug)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global fmt subscriber.
    ///
    /// Calling this more than once is harmless: later calls find a
    /// subscriber already installed and return `false`.
    pub fn init(level: &str) -> bool {
        fmt()
            .with_env_filter(Self::filter(level))
            .with_target(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok()
    }

    fn filter(level: &str) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| Self::configured(level))
    }

    fn configured(level: &str) -> EnvFilter {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
    }

    /// Records one completed query: its name and how many events went in and came out.
    #[inline]
    pub fn log_query(operation: &str, input: usize, output: usize) {
        let span = info_span!("query", operation = operation);
        let _guard = span.enter();
        tracing::info!(input, output, "Query completed");
    }
}
