//! Library configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. Credentials and destination numbers are always
//! sourced from here, never from literals at the call sites.

use std::env;

/// Library configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Report generation configuration
    pub report: ReportConfig,
    /// Profile store configuration
    pub profile: ProfileConfig,
    /// Email provider configuration
    pub email: EmailConfig,
    /// SMS gateway configuration
    pub sms: SmsConfig,
}

/// Report generation configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Default language code for generated reports
    pub default_language: String,
    /// Directory the disk saver writes reports into
    pub output_dir: String,
}

/// Profile store configuration
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    /// Base URL of the profile service
    pub base_url: String,
    /// Bearer token for the authenticated session, if any
    pub access_token: String,
}

/// Email provider configuration
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Endpoint accepting `{to, subject, html}` send requests
    pub api_url: String,
    /// API key sent with each request
    pub api_key: String,
}

/// SMS gateway configuration
#[derive(Debug, Clone)]
pub struct SmsConfig {
    /// Gateway API base URL
    pub api_base_url: String,
    /// API key sent in the `x-api-key` header
    pub api_key: String,
    /// Registered device identifier (part of the request path)
    pub device_id: String,
    /// Destination phone number for report notifications
    pub destination: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            report: ReportConfig {
                default_language: env::var("REPORT_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
                output_dir: env::var("REPORT_OUTPUT_DIR").unwrap_or_else(|_| {
                    if let Some(home) = env::var_os("HOME") {
                        format!("{}/Downloads", home.to_string_lossy())
                    } else {
                        ".".to_string()
                    }
                }),
            },
            profile: ProfileConfig {
                base_url: env::var("PROFILE_API_URL").unwrap_or_default(),
                access_token: env::var("PROFILE_ACCESS_TOKEN").unwrap_or_default(),
            },
            email: EmailConfig {
                api_url: env::var("EMAIL_API_URL").unwrap_or_default(),
                api_key: env::var("EMAIL_API_KEY").unwrap_or_default(),
            },
            sms: SmsConfig {
                api_base_url: env::var("SMS_API_BASE_URL")
                    .unwrap_or_else(|_| "https://api.textbee.dev/api/v1".to_string()),
                api_key: env::var("SMS_API_KEY").unwrap_or_default(),
                device_id: env::var("SMS_DEVICE_ID").unwrap_or_default(),
                destination: env::var("SMS_DESTINATION").unwrap_or_default(),
                timeout_secs: env::var("SMS_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(10),
            },
        }
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.textbee.dev/api/v1".to_string(),
            api_key: String::new(),
            device_id: String::new(),
            destination: String::new(),
            timeout_secs: 10,
        }
    }
}
