//! Plain-text listing of events and query results.

use std::io::{self, Write};

use eventscope_config::RenderConfig;
use eventscope_core::aggregate::ValueSummary;
use eventscope_core::Event;

#[derive(Clone, Debug)]
pub struct Renderer {
    precision: Option<usize>,
    separator_width: usize,
}

impl From<&RenderConfig> for Renderer {
    fn from(config: &RenderConfig) -> Self {
        Self {
            precision: config.precision,
            separator_width: config.separator_width,
        }
    }
}

impl Renderer {
    pub fn number(&self, x: f64) -> String {
        match self.precision {
            Some(p) => format!("{:.*}", p, x),
            None => format!("{}", x),
        }
    }

    pub fn event_line(&self, event: &Event) -> String {
        format!(
            "Timestamp: {}, Type: {}, Source: {}, Value: {}",
            self.number(event.timestamp()),
            event.kind().index(),
            event.source(),
            self.number(event.value())
        )
    }

    /// One line per event, a blank line, then the dashed separator.
    pub fn write_listing<W: Write>(&self, out: &mut W, events: &[Event]) -> io::Result<()> {
        for event in events {
            writeln!(out, "{}", self.event_line(event))?;
        }
        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(self.separator_width))
    }

    pub fn summary_line(&self, label: &str, summary: &ValueSummary) -> String {
        let optional = |x: Option<f64>| x.map_or_else(|| "-".to_string(), |v| self.number(v));
        format!(
            "{}: count={} total={} min={} max={} mean={}",
            label,
            summary.count,
            self.number(summary.total),
            optional(summary.min),
            optional(summary.max),
            optional(summary.mean())
        )
    }
}
