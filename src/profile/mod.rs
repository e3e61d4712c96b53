//! Profile module
//!
//! Best-effort user profile enrichment. Reports are richer with the signed-in
//! user's profile attached, but a missing session or a failed lookup must
//! never block report generation, so the only entry point the builder uses is
//! [`best_effort_profile`], which cannot fail.

pub mod models;
pub mod store;

pub use models::UserProfile;
pub use store::{HttpProfileStore, ProfileStore};

use thiserror::Error;

/// Errors that can occur while talking to the profile store
#[derive(Error, Debug)]
pub enum ProfileError {
    /// HTTP transport failure
    #[error("Profile request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Profile service returned a non-success status
    #[error("Profile service returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Response body could not be decoded
    #[error("Invalid profile response: {0}")]
    InvalidResponse(String),
}

/// Fetch the current user's profile, swallowing every failure
///
/// Returns `None` both when nobody is signed in and when the lookup fails;
/// failures are logged and discarded. Report construction never aborts on
/// this path.
pub async fn best_effort_profile(store: &dyn ProfileStore) -> Option<UserProfile> {
    match store.fetch_current().await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::warn!(error = %e, "Profile lookup failed, continuing without profile");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FailingStore;

    #[async_trait]
    impl ProfileStore for FailingStore {
        async fn fetch_current(&self) -> Result<Option<UserProfile>, ProfileError> {
            Err(ProfileError::InvalidResponse("boom".to_string()))
        }
    }

    struct AnonymousStore;

    #[async_trait]
    impl ProfileStore for AnonymousStore {
        async fn fetch_current(&self) -> Result<Option<UserProfile>, ProfileError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_best_effort_swallows_errors() {
        assert!(best_effort_profile(&FailingStore).await.is_none());
    }

    #[tokio::test]
    async fn test_best_effort_no_session() {
        assert!(best_effort_profile(&AnonymousStore).await.is_none());
    }
}
