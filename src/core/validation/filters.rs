//! Reusable field filters
//!
//! These filters normalize raw input before validation

/// Filter: trim surrounding whitespace
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Filter: trim and uppercase (group codes typed by hand)
pub fn group_code(value: &str) -> String {
    value.trim().to_uppercase()
}
