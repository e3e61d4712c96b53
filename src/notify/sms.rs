//! SMS notification gateway
//!
//! Single POST per send to a device-gateway endpoint, bounded by a request
//! timeout. The destination number comes from injected configuration.

use crate::config::SmsConfig;
use crate::notify::NotifyError;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Outbound SMS gateway
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Send one text message
    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct SmsRequest<'a> {
    recipients: [&'a str; 1],
    message: &'a str,
}

/// HTTP SMS gateway client
///
/// POSTs `{recipients, message}` to
/// `{base}/gateway/devices/{device_id}/send-sms` with the API key in the
/// `x-api-key` header. The configured timeout (10 s by default) bounds the
/// whole request; there are no retries.
pub struct HttpSmsGateway {
    client: reqwest::Client,
    config: SmsConfig,
}

impl HttpSmsGateway {
    /// Create a gateway client from configuration
    pub fn new(client: reqwest::Client, config: SmsConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl SmsGateway for HttpSmsGateway {
    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
        if self.config.api_key.is_empty() {
            return Err(NotifyError::Config("SMS API key is empty".to_string()));
        }
        if self.config.device_id.is_empty() {
            return Err(NotifyError::Config("SMS device id is empty".to_string()));
        }

        let url = format!(
            "{}/gateway/devices/{}/send-sms",
            self.config.api_base_url, self.config.device_id
        );

        tracing::debug!(recipient = %recipient, message_len = message.len(), "Sending SMS notification");

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .json(&SmsRequest {
                recipients: [recipient],
                message,
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

        tracing::debug!(status = status.as_u16(), "SMS gateway accepted message");
        Ok(())
    }
}
