//! Placeholder values standing in for "no value provided".

/// Category/type placeholder for missing values.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Issue-name placeholder meaning "no equivalent in this tool".
pub const NOT_AVAILABLE: &str = "NA";

/// Returns the trimmed value, or [`UNCATEGORIZED`] when it is blank.
pub fn or_uncategorized(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Returns the trimmed value, or [`NOT_AVAILABLE`] when it is blank.
pub fn or_not_available(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn is_not_available(value: &str) -> bool {
    value == NOT_AVAILABLE
}
