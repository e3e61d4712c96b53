//! Email notification provider
//!
//! Single outbound request per send against a JSON email endpoint.

use crate::config::EmailConfig;
use crate::notify::NotifyError;
use async_trait::async_trait;
use serde::Serialize;

/// Outbound email provider
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send one HTML email
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct EmailRequest<'a> {
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// HTTP email provider
///
/// POSTs `{to, subject, html}` to the configured endpoint with an API-key
/// header. One attempt per send.
pub struct HttpEmailProvider {
    client: reqwest::Client,
    config: EmailConfig,
}

impl HttpEmailProvider {
    /// Create a provider from configuration
    pub fn new(client: reqwest::Client, config: EmailConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl EmailProvider for HttpEmailProvider {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), NotifyError> {
        if self.config.api_url.is_empty() {
            return Err(NotifyError::Config("email endpoint is not set".to_string()));
        }
        if self.config.api_key.is_empty() {
            return Err(NotifyError::Config("email API key is empty".to_string()));
        }

        tracing::debug!(to = %to, subject = %subject, "Sending email notification");

        let response = self
            .client
            .post(&self.config.api_url)
            .header("x-api-key", &self.config.api_key)
            .json(&EmailRequest {
                to,
                subject,
                html: html_body,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(to = %to, "Email notification accepted by provider");
        Ok(())
    }
}
