//! Conversation statistics
//!
//! Single-pass aggregation over the message list plus the duration display
//! formatting used by both stat fields.

use crate::chat::{Message, MessageRole};
use crate::report::models::ReportStats;

/// Compute aggregate statistics for a conversation
///
/// One pass over the messages accumulates role counts, attachment count, and
/// the response-time sum over adjacent user→assistant pairs. The empty
/// conversation and the zero-pair case both come out as `"0s"` with no
/// division by zero. A negative gap within a pair (out-of-order timestamps)
/// clamps to zero; ordering is otherwise not validated.
pub fn compute_stats(messages: &[Message]) -> ReportStats {
    let mut user_messages = 0;
    let mut assistant_messages = 0;
    let mut attachments = 0;
    let mut response_time_ms: i64 = 0;
    let mut response_pairs: i64 = 0;

    for (i, message) in messages.iter().enumerate() {
        match message.role {
            MessageRole::User => user_messages += 1,
            MessageRole::Assistant => assistant_messages += 1,
        }
        if message.attachment.is_some() {
            attachments += 1;
        }
        if message.role == MessageRole::User {
            if let Some(next) = messages.get(i + 1) {
                if next.role == MessageRole::Assistant {
                    let gap = (next.timestamp - message.timestamp).num_milliseconds();
                    response_time_ms += gap.max(0);
                    response_pairs += 1;
                }
            }
        }
    }

    let average_ms = if response_pairs > 0 {
        (response_time_ms / response_pairs) as u64
    } else {
        0
    };

    let duration_ms = match (
        messages.iter().map(|m| m.timestamp).min(),
        messages.iter().map(|m| m.timestamp).max(),
    ) {
        (Some(first), Some(last)) => (last - first).num_milliseconds().max(0) as u64,
        _ => 0,
    };

    ReportStats {
        total_messages: messages.len(),
        user_messages,
        assistant_messages,
        attachments,
        average_response_time: format_duration(average_ms),
        total_duration: format_duration(duration_ms),
    }
}

/// Format a millisecond duration for display
///
/// `"{h}h {m}m {s}s"` when hours are present, `"{m}m {s}s"` when only minutes
/// are, else `"{s}s"`. Smaller units wrap modulo 60 when a larger unit is
/// shown.
pub fn format_duration(ms: u64) -> String {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn msg(role: MessageRole, ms: i64) -> Message {
        Message::new(role, "hello", at(ms))
    }

    #[test]
    fn test_empty_conversation() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_messages, 0);
        assert_eq!(stats.user_messages, 0);
        assert_eq!(stats.assistant_messages, 0);
        assert_eq!(stats.attachments, 0);
        assert_eq!(stats.average_response_time, "0s");
        assert_eq!(stats.total_duration, "0s");
    }

    #[test]
    fn test_role_counts_and_duration() {
        let messages = vec![
            msg(MessageRole::User, 0),
            msg(MessageRole::Assistant, 2_000),
            msg(MessageRole::User, 10_000),
            msg(MessageRole::Assistant, 14_000),
        ];
        let stats = compute_stats(&messages);
        assert_eq!(stats.total_messages, 4);
        assert_eq!(stats.user_messages, 2);
        assert_eq!(stats.assistant_messages, 2);
        assert_eq!(stats.total_duration, "14s");
        // (2000 + 4000) / 2
        assert_eq!(stats.average_response_time, "3s");
    }

    #[test]
    fn test_single_pair_average() {
        let messages = vec![msg(MessageRole::User, 0), msg(MessageRole::Assistant, 2_000)];
        let stats = compute_stats(&messages);
        assert_eq!(stats.average_response_time, "2s");
    }

    #[test]
    fn test_no_pairs_average_is_zero() {
        let messages = vec![
            msg(MessageRole::Assistant, 0),
            msg(MessageRole::User, 1_000),
            msg(MessageRole::User, 2_000),
        ];
        let stats = compute_stats(&messages);
        assert_eq!(stats.average_response_time, "0s");
    }

    #[test]
    fn test_counts_sum_invariant() {
        let messages = vec![
            msg(MessageRole::User, 0),
            msg(MessageRole::Assistant, 1_000),
            msg(MessageRole::User, 2_000),
        ];
        let stats = compute_stats(&messages);
        assert!(stats.user_messages + stats.assistant_messages <= stats.total_messages);
        assert!(stats.attachments <= stats.total_messages);
    }

    #[test]
    fn test_out_of_order_pair_clamps_to_zero() {
        let messages = vec![msg(MessageRole::User, 5_000), msg(MessageRole::Assistant, 1_000)];
        let stats = compute_stats(&messages);
        assert_eq!(stats.average_response_time, "0s");
    }

    #[test]
    fn test_attachment_count() {
        use crate::chat::{Attachment, AttachmentKind};
        let attachment = Attachment {
            name: "a.png".to_string(),
            url: "https://files.example/a.png".to_string(),
            size: 100,
            kind: AttachmentKind::Image,
        };
        let messages = vec![
            msg(MessageRole::User, 0).with_attachment(attachment),
            msg(MessageRole::Assistant, 1_000),
        ];
        assert_eq!(compute_stats(&messages).attachments, 1);
    }

    #[test]
    fn test_format_duration_seconds_only() {
        assert_eq!(format_duration(45_000), "45s");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(125_000), "2m 5s");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(3_725_000), "1h 2m 5s");
    }

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(999), "0s");
    }
}
