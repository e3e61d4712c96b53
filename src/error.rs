//! Error types and error handling for the library
//!
//! Module-specific errors (`ProfileError`, `NotifyError`, `DeliverError`) live
//! next to the code that produces them and fold into `ReportError` here.

use thiserror::Error;

/// Library-level error types
///
/// Only a subset of these ever reaches a caller: profile and notification
/// failures are recovered where they occur and routed to the tracing sink,
/// while save failures propagate because the saved file is the primary
/// observable side effect.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Profile store lookup failed
    #[error("Profile lookup failed: {0}")]
    Profile(#[from] crate::profile::ProfileError),

    /// A notification leg failed
    #[error("Notification failed: {0}")]
    Notify(#[from] crate::notify::NotifyError),

    /// Saving the rendered report failed
    #[error("Report save failed: {0}")]
    Deliver(#[from] crate::deliver::DeliverError),

    /// Internal error (catch-all for unexpected errors)
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
