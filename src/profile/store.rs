//! Profile store client
//!
//! Trait seam for the external authentication/profile service plus the HTTP
//! implementation used in production. The store is read-only from this
//! crate's perspective.

use crate::config::ProfileConfig;
use crate::profile::{ProfileError, UserProfile};
use async_trait::async_trait;
use serde::Deserialize;

/// Read-only access to the external profile store
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the currently authenticated user's profile
    ///
    /// # Returns
    /// * `Ok(Some(profile))` - An authenticated session exists
    /// * `Ok(None)` - Nobody is signed in
    /// * `Err(ProfileError)` - The lookup itself failed
    async fn fetch_current(&self) -> Result<Option<UserProfile>, ProfileError>;
}

/// Identity record returned by the auth endpoint
#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    email: Option<String>,
}

/// Optional display fields returned by the profiles endpoint
#[derive(Debug, Deserialize, Default)]
struct ProfileRecord {
    username: Option<String>,
    full_name: Option<String>,
    avatar_url: Option<String>,
    gender: Option<String>,
    date_of_birth: Option<String>,
}

/// HTTP client for the profile service
///
/// Two sequential reads: `GET /auth/user` for the session identity, then
/// `GET /profiles/{id}` for the display fields. A missing or expired session
/// (401) is reported as `Ok(None)`; a failed display-field lookup degrades to
/// an identity-only profile rather than an error.
pub struct HttpProfileStore {
    client: reqwest::Client,
    config: ProfileConfig,
}

impl HttpProfileStore {
    /// Create a store client from configuration
    pub fn new(client: reqwest::Client, config: ProfileConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ProfileStore for HttpProfileStore {
    async fn fetch_current(&self) -> Result<Option<UserProfile>, ProfileError> {
        // An empty token means no session was ever established.
        if self.config.access_token.is_empty() {
            tracing::debug!("No access token configured, skipping profile lookup");
            return Ok(None);
        }

        let url = format!("{}/auth/user", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 {
            tracing::debug!("Profile service reports no authenticated session");
            return Ok(None);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(ProfileError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let user: AuthUser = response
            .json()
            .await
            .map_err(|e| ProfileError::InvalidResponse(e.to_string()))?;

        let record = self.fetch_record(&user.id).await;

        Ok(Some(UserProfile {
            id: user.id,
            email: user.email.unwrap_or_else(|| "Unknown".to_string()),
            username: record.username,
            full_name: record.full_name,
            avatar_url: record.avatar_url,
            gender: record.gender,
            date_of_birth: record.date_of_birth,
        }))
    }
}

impl HttpProfileStore {
    /// Fetch display fields, degrading to empty fields on any failure
    async fn fetch_record(&self, user_id: &str) -> ProfileRecord {
        let url = format!("{}/profiles/{}", self.config.base_url, user_id);
        let result = self
            .client
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                response.json().await.unwrap_or_else(|e| {
                    tracing::debug!(error = %e, "Profile record body was malformed");
                    ProfileRecord::default()
                })
            }
            Ok(response) => {
                tracing::debug!(
                    status = response.status().as_u16(),
                    "Profile record lookup returned non-success status"
                );
                ProfileRecord::default()
            }
            Err(e) => {
                tracing::debug!(error = %e, "Profile record lookup failed");
                ProfileRecord::default()
            }
        }
    }
}
