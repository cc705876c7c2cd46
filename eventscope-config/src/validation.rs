//! Custom validation functions for configuration.

use validator::ValidationError;

fn matches(pattern: &str, value: &str, code: &'static str) -> Result<(), ValidationError> {
    let re = regex::Regex::new(pattern).map_err(|_| ValidationError::new("invalid_regex"))?;
    if re.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(code))
    }
}

/// Validate an event file format name.
pub fn validate_format(format: &str) -> Result<(), ValidationError> {
    matches("^(?i)(yaml|yml|json)$", format, "invalid_feed_format")
}

/// Validate a sort direction.
pub fn validate_order(order: &str) -> Result<(), ValidationError> {
    matches("^(?i)(asc|ascending|desc|descending)$", order, "invalid_sort_order")
}

/// Validate a log level.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    matches("^(?i)(trace|debug|info|warn|error|off)$", level, "invalid_log_level")
}
