//! Report generation service
//!
//! One call from the application: build the report record, render it, and
//! hand it to the dispatcher. The signed-in user's email, when the profile
//! lookup found one, becomes the email leg's recipient.

use crate::chat::Message;
use crate::config::Config;
use crate::deliver::{Delivery, DiskSaver, Dispatcher};
use crate::error::ReportError;
use crate::notify::{HttpEmailProvider, HttpSmsGateway};
use crate::profile::{HttpProfileStore, ProfileStore};
use crate::render::render_html;
use crate::report::{build_report, ChatReport};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A generated and delivered report
pub struct GeneratedReport {
    /// The immutable report record
    pub report: ChatReport,
    /// The delivery, including the detached notification handle
    pub delivery: Delivery,
}

/// End-to-end report generation
pub struct ReportService {
    profile_store: Arc<dyn ProfileStore>,
    dispatcher: Dispatcher,
}

impl ReportService {
    /// Create a service from its collaborators
    pub fn new(profile_store: Arc<dyn ProfileStore>, dispatcher: Dispatcher) -> Self {
        Self {
            profile_store,
            dispatcher,
        }
    }

    /// Wire up the production collaborators from configuration
    ///
    /// One shared HTTP client backs the profile store and both notification
    /// providers; reports are saved to the configured output directory.
    pub fn from_config(config: &Config) -> Self {
        let client = reqwest::Client::new();
        let dispatcher = Dispatcher::new(
            Arc::new(DiskSaver::new(config.report.output_dir.clone())),
            Arc::new(HttpEmailProvider::new(client.clone(), config.email.clone())),
            Arc::new(HttpSmsGateway::new(client.clone(), config.sms.clone())),
            config.sms.destination.clone(),
        );
        let profile_store = Arc::new(HttpProfileStore::new(client, config.profile.clone()));
        Self::new(profile_store, dispatcher)
    }

    /// Build, render, and deliver a report for one conversation
    ///
    /// # Arguments
    /// * `messages` - Ordered message sequence, shared into the report
    /// * `title` - Report title, also the basis of the filename
    /// * `language` - Language code for the rendered report
    pub async fn generate(
        &self,
        messages: Arc<Vec<Message>>,
        title: &str,
        language: &str,
    ) -> Result<GeneratedReport, ReportError> {
        let report = build_report(messages, title, language, self.profile_store.as_ref()).await;
        let html = render_html(&report);
        let filename = report_filename(title, report.timestamp);
        let user_email = report.user.as_ref().map(|u| u.email.as_str());

        let delivery = self.dispatcher.deliver(&html, &filename, user_email).await?;
        Ok(GeneratedReport { report, delivery })
    }
}

/// Derive a report filename from the title and generation date
///
/// The title is lowercased and reduced to alphanumeric runs joined by
/// hyphens so the result is safe as a bare filename.
pub fn report_filename(title: &str, generated_at: DateTime<Utc>) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-');
    let slug = if slug.is_empty() { "chat" } else { slug };
    // Collapse runs of hyphens left by consecutive non-alphanumerics
    let mut collapsed = String::with_capacity(slug.len());
    let mut prev_hyphen = false;
    for c in slug.chars() {
        if c == '-' {
            if !prev_hyphen {
                collapsed.push('-');
            }
            prev_hyphen = true;
        } else {
            collapsed.push(c);
            prev_hyphen = false;
        }
    }
    format!("{}-report-{}.html", collapsed, generated_at.format("%Y-%m-%d"))
}
