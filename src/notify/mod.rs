//! Notification module
//!
//! The two best-effort notification legs fired after a report is saved. Both
//! providers are single-attempt: a failed send is logged by the caller and
//! abandoned, never retried.

pub mod email;
pub mod sms;

pub use email::{EmailProvider, HttpEmailProvider};
pub use sms::{HttpSmsGateway, SmsGateway};

use thiserror::Error;

/// Errors that can occur while sending a notification
#[derive(Error, Debug)]
pub enum NotifyError {
    /// HTTP transport failure (including timeout)
    #[error("Notification request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status
    #[error("Notification provider returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Provider configuration is missing or incomplete
    #[error("Notification provider misconfigured: {0}")]
    Config(String),
}
