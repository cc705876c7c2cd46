//! Event feed configuration.
//!
//! Where the events come from: the built-in mock flight log when no path is
//! set, otherwise an event file on disk.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

#[derive(Default, Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FeedConfig {
    /// Event file to load. `None` selects the mock flight log.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// File format (`yaml` or `json`); guessed from the extension when unset.
    #[serde(default)]
    #[validate(custom(function = validation::validate_format))]
    pub format: Option<String>,
}
