//! Report data models

use crate::chat::Message;
use crate::profile::UserProfile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Aggregate statistics over one conversation
///
/// Counts always satisfy `user_messages + assistant_messages <= total_messages`
/// and `attachments <= total_messages`. The two time fields are pre-formatted
/// display strings; the no-pair and empty-conversation cases both read `"0s"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    /// Total number of messages
    pub total_messages: usize,
    /// Messages sent by the user
    pub user_messages: usize,
    /// Messages sent by the assistant
    pub assistant_messages: usize,
    /// Messages carrying an attachment
    pub attachments: usize,
    /// Average user-to-assistant response latency, formatted
    pub average_response_time: String,
    /// Total conversation duration (last minus first timestamp), formatted
    pub total_duration: String,
}

/// Descriptive metadata stamped at generation time
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Language code the report was rendered for
    pub language: String,
    /// Report schema version
    pub report_version: String,
    /// Host platform (OS and architecture)
    pub platform: String,
    /// Generating runtime identifier
    pub runtime: String,
}

/// The aggregated, renderable record derived from one conversation
///
/// Constructed once per report request by [`crate::report::build_report`] and
/// never mutated afterwards. Messages are shared with the caller rather than
/// copied.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReport {
    /// Conversation title
    pub title: String,
    /// Generation timestamp
    pub timestamp: DateTime<Utc>,
    /// The full ordered message sequence
    pub messages: Arc<Vec<Message>>,
    /// Aggregate statistics
    pub stats: ReportStats,
    /// Profile of the signed-in user, when one existed at build time
    pub user: Option<UserProfile>,
    /// Generation metadata
    pub metadata: ReportMetadata,
}
