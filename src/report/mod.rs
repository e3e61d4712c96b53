//! Report module
//!
//! Builds the immutable [`ChatReport`] record from a conversation: aggregate
//! statistics, optional profile enrichment, and generation metadata.

pub mod builder;
pub mod models;
pub mod stats;

pub use builder::build_report;
pub use models::{ChatReport, ReportMetadata, ReportStats};
pub use stats::{compute_stats, format_duration};

/// Report schema version stamped into every report's metadata
pub const REPORT_VERSION: &str = "1.1.0";
