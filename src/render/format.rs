//! Display formatting helpers for the report template

use chrono::{DateTime, Utc};

/// Format a byte count for display
///
/// `B` below 1024, then `KB` and `MB` with one decimal place.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Long timestamp form used in the header and metadata sections
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %-I:%M:%S %p UTC").to_string()
}

/// Short clock form shown next to each message
pub fn format_message_time(ts: DateTime<Utc>) -> String {
    ts.format("%-I:%M:%S %p").to_string()
}
