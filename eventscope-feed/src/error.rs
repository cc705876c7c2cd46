use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to read event file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML event data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON event data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Event document must be a list of records or a map with an `events` list")]
    NotAList,

    #[error("Event #{index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Unknown event file format: {0:?} (expected yaml or json)")]
    UnknownFormat(String),

    #[error("Event #{index} has a non-finite {field}")]
    NonFinite { index: usize, field: &'static str },
}
