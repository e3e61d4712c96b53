//! Report builder
//!
//! Assembles the immutable report record: statistics pass, best-effort
//! profile enrichment, metadata stamping.

use crate::chat::Message;
use crate::profile::{self, ProfileStore};
use crate::report::models::{ChatReport, ReportMetadata};
use crate::report::stats::compute_stats;
use crate::report::REPORT_VERSION;
use chrono::Utc;
use std::sync::Arc;

/// Build a report record for one conversation
///
/// The message list may be empty; statistics degrade to all zeroes rather
/// than failing. The profile lookup is one best-effort read against the
/// external store and never aborts the build. The returned record is never
/// mutated afterwards.
///
/// # Arguments
/// * `messages` - Ordered message sequence, shared into the report
/// * `title` - Report title
/// * `language` - Language code the report will be rendered for
/// * `store` - Profile store consulted for the signed-in user
pub async fn build_report(
    messages: Arc<Vec<Message>>,
    title: impl Into<String>,
    language: impl Into<String>,
    store: &dyn ProfileStore,
) -> ChatReport {
    let title = title.into();
    let language = language.into();

    let stats = compute_stats(&messages);
    tracing::debug!(
        title = %title,
        total_messages = stats.total_messages,
        attachments = stats.attachments,
        "Computed conversation statistics"
    );

    let user = profile::best_effort_profile(store).await;

    let now = Utc::now();
    let metadata = ReportMetadata {
        generated_at: now,
        language,
        report_version: REPORT_VERSION.to_string(),
        platform: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
        runtime: format!("chat-report/{}", env!("CARGO_PKG_VERSION")),
    };

    ChatReport {
        title,
        timestamp: now,
        messages,
        stats,
        user,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MessageRole;
    use crate::profile::{ProfileError, UserProfile};
    use async_trait::async_trait;
    use chrono::TimeZone;

    struct NoSession;

    #[async_trait]
    impl ProfileStore for NoSession {
        async fn fetch_current(&self) -> Result<Option<UserProfile>, ProfileError> {
            Ok(None)
        }
    }

    struct Broken;

    #[async_trait]
    impl ProfileStore for Broken {
        async fn fetch_current(&self) -> Result<Option<UserProfile>, ProfileError> {
            Err(ProfileError::InvalidResponse("connection reset".to_string()))
        }
    }

    struct SignedIn;

    #[async_trait]
    impl ProfileStore for SignedIn {
        async fn fetch_current(&self) -> Result<Option<UserProfile>, ProfileError> {
            Ok(Some(UserProfile {
                id: "u-1".to_string(),
                email: "ada@example.com".to_string(),
                username: Some("ada".to_string()),
                full_name: None,
                avatar_url: None,
                gender: None,
                date_of_birth: None,
            }))
        }
    }

    fn conversation() -> Arc<Vec<Message>> {
        let t0 = Utc.timestamp_millis_opt(0).unwrap();
        let t1 = Utc.timestamp_millis_opt(2_000).unwrap();
        Arc::new(vec![
            Message::new(MessageRole::User, "hi", t0),
            Message::new(MessageRole::Assistant, "hello", t1),
        ])
    }

    #[tokio::test]
    async fn test_build_empty_conversation() {
        let report = build_report(Arc::new(Vec::new()), "Empty", "en", &NoSession).await;
        assert_eq!(report.stats.total_messages, 0);
        assert_eq!(report.stats.total_duration, "0s");
        assert!(report.user.is_none());
        assert_eq!(report.metadata.report_version, REPORT_VERSION);
    }

    #[tokio::test]
    async fn test_build_shares_messages() {
        let messages = conversation();
        let report = build_report(Arc::clone(&messages), "Chat", "en", &NoSession).await;
        assert!(Arc::ptr_eq(&messages, &report.messages));
    }

    #[tokio::test]
    async fn test_profile_failure_does_not_abort() {
        let report = build_report(conversation(), "Chat", "en", &Broken).await;
        assert!(report.user.is_none());
        assert_eq!(report.stats.total_messages, 2);
    }

    #[tokio::test]
    async fn test_profile_attached_when_signed_in() {
        let report = build_report(conversation(), "Chat", "hi", &SignedIn).await;
        let user = report.user.expect("profile should be attached");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(report.metadata.language, "hi");
    }
}
