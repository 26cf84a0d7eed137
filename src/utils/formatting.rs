//! Formatting utilities for human-readable output.

use chrono::{DateTime, Utc};

/// Placeholder shown wherever a date is absent.
pub const ABSENT_DATE: &str = "N/A";

/// Format a timestamp in the long en-US style, e.g. "January 5, 2024".
///
/// An absent timestamp renders as the literal sentinel "N/A". Pure
/// function: the same input always yields the same output.
pub fn format_long_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => ABSENT_DATE.to_string(),
    }
}
