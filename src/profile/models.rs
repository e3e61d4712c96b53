//! Profile data models

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as returned by the profile store
///
/// Identity and email are always present for an authenticated session; the
/// display fields are whatever the user chose to fill in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable user identifier
    pub id: String,
    /// Account email address
    pub email: String,
    /// Chosen username
    pub username: Option<String>,
    /// Full display name
    pub full_name: Option<String>,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Self-reported gender
    pub gender: Option<String>,
    /// Date of birth, as entered
    pub date_of_birth: Option<String>,
}

impl UserProfile {
    /// Best display name available: full name, then username, then "User"
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("User")
    }

    /// Single-character initial used when no avatar image exists
    pub fn initial(&self) -> String {
        self.username
            .as_deref()
            .unwrap_or(&self.email)
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }
}
