//! Text listing configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct RenderConfig {
    /// Fixed number of decimals for timestamps and values.
    /// `None` prints the shortest exact form (`5`, `1.5`).
    #[serde(default)]
    #[validate(range(max = 9))]
    pub precision: Option<usize>,

    /// Width of the dashed line printed after each listing.
    #[serde(default = "default_separator_width")]
    #[validate(range(min = 1, max = 200))]
    pub separator_width: usize,
}

fn default_separator_width() -> usize {
    40
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            precision: None,
            separator_width: default_separator_width(),
        }
    }
}
