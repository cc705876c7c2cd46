//! ## eventscope-feed::parse
//! **Event files in YAML or JSON**
//!
//! A document is either a bare list of records or a map holding the list
//! under `events`:
//!
//! ```yaml
//! events:
//!   - { timestamp: 5.0, kind: actuator_command, source: flaps, value: 15.0 }
//!   - { timestamp: 1.5, kind: control_input, source: pilot, value: 75.0 }
//! ```
//!
//! Records keep their file order; nothing is sorted on load. A bad record is
//! reported by its position in the list together with the decoder's message.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use eventscope_core::Event;

use crate::error::FeedError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedFormat {
    Yaml,
    Json,
}

impl FeedFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedFormat::Yaml => f.write_str("yaml"),
            FeedFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for FeedFormat {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(FeedFormat::Yaml),
            "json" => Ok(FeedFormat::Json),
            _ => Err(FeedError::UnknownFormat(s.to_string())),
        }
    }
}

/// Parse an event document held in memory.
pub fn parse_str(input: &str, format: FeedFormat) -> Result<Vec<Event>, FeedError> {
    let events: Vec<Event> = match format {
        FeedFormat::Yaml => {
            let records = match serde_yaml::from_str::<serde_yaml::Value>(input)? {
                serde_yaml::Value::Sequence(records) => records,
                serde_yaml::Value::Mapping(mut map) => match map.remove("events") {
                    Some(serde_yaml::Value::Sequence(records)) => records,
                    _ => return Err(FeedError::NotAList),
                },
                _ => return Err(FeedError::NotAList),
            };
            decode_records(records, serde_yaml::from_value)?
        }
        FeedFormat::Json => {
            let records = match serde_json::from_str::<serde_json::Value>(input)? {
                serde_json::Value::Array(records) => records,
                serde_json::Value::Object(mut map) => match map.remove("events") {
                    Some(serde_json::Value::Array(records)) => records,
                    _ => return Err(FeedError::NotAList),
                },
                _ => return Err(FeedError::NotAList),
            };
            decode_records(records, serde_json::from_value)?
        }
    };
    check_finite(&events)?;
    Ok(events)
}

fn decode_records<V, T, E, F>(records: Vec<V>, decode: F) -> Result<Vec<T>, FeedError>
where
    E: fmt::Display,
    F: Fn(V) -> Result<T, E>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            decode(record).map_err(|err| FeedError::InvalidRecord {
                index,
                reason: err.to_string(),
            })
        })
        .collect()
}

/// Read and parse an event file. Without an explicit `format` the file extension decides.
pub fn load_from_path<P: AsRef<Path>>(
    path: P,
    format: Option<FeedFormat>,
) -> Result<Vec<Event>, FeedError> {
    let path = path.as_ref();
    let format = match format.or_else(|| FeedFormat::from_path(path)) {
        Some(format) => format,
        None => {
            return Err(FeedError::UnknownFormat(
                path.extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ))
        }
    };

    let input = std::fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_str(&input, format)?;
    debug!(path = %path.display(), %format, count = events.len(), "Loaded event file");
    Ok(events)
}

fn check_finite(events: &[Event]) -> Result<(), FeedError> {
    for (index, event) in events.iter().enumerate() {
        if !event.timestamp().is_finite() {
            return Err(FeedError::NonFinite {
                index,
                field: "timestamp",
            });
        }
        if !event.value().is_finite() {
            return Err(FeedError::NonFinite {
                index,
                field: "value",
            });
        }
    }
    Ok(())
}
