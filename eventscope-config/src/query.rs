//! Query defaults.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct QueryConfig {
    /// Sort direction used when a command does not ask for one.
    #[serde(default = "default_order")]
    #[validate(custom(function = validation::validate_order))]
    pub default_order: String,
}

fn default_order() -> String {
    "ascending".into()
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_order: default_order(),
        }
    }
}
