//! Report delivery and notification dispatch
//!
//! `deliver` awaits the save, then spawns one detached task for the two
//! notification legs and returns. The caller's result only ever reflects the
//! save; notification failures are logged inside the detached task and
//! discarded. The spawn handle is exposed on [`Delivery`] so tests (and
//! callers that care) can observe the legs without the contract waiting on
//! them.

use crate::deliver::{DeliverError, FileSaver};
use crate::notify::{EmailProvider, SmsGateway};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Per-leg outcome of the detached notification task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationOutcome {
    /// Email leg result; `None` when no address was supplied
    pub email: Option<bool>,
    /// SMS leg result
    pub sms: bool,
}

/// A successful delivery
///
/// Exists as soon as the save completed; the notification legs are still in
/// flight (or already abandoned) when the caller gets this.
pub struct Delivery {
    /// Where the report was saved
    pub path: PathBuf,
    /// Handle to the detached notification task
    pub notifications: JoinHandle<NotificationOutcome>,
}

/// Saves rendered reports and dispatches the notification legs
pub struct Dispatcher {
    saver: Arc<dyn FileSaver>,
    email: Arc<dyn EmailProvider>,
    sms: Arc<dyn SmsGateway>,
    sms_destination: String,
}

impl Dispatcher {
    /// Create a dispatcher from its collaborators
    ///
    /// `sms_destination` is the pre-configured number every report
    /// notification is texted to.
    pub fn new(
        saver: Arc<dyn FileSaver>,
        email: Arc<dyn EmailProvider>,
        sms: Arc<dyn SmsGateway>,
        sms_destination: impl Into<String>,
    ) -> Self {
        Self {
            saver,
            email,
            sms,
            sms_destination: sms_destination.into(),
        }
    }

    /// Save the report, then fire the detached notification legs
    ///
    /// The save is awaited and its failure propagates as the overall failure.
    /// After a successful save this returns immediately; the email leg (when
    /// an address was supplied) and the SMS leg run in one background task,
    /// each failure logged and discarded, neither affecting the other.
    pub async fn deliver(
        &self,
        html: &str,
        filename: &str,
        user_email: Option<&str>,
    ) -> Result<Delivery, DeliverError> {
        let path = self.saver.save(html, filename).await?;
        tracing::info!(filename = %filename, "Report saved, dispatching notifications");

        let email = Arc::clone(&self.email);
        let sms = Arc::clone(&self.sms);
        let filename = filename.to_string();
        let user_email = user_email.map(str::to_string);
        let destination = self.sms_destination.clone();

        let notifications = tokio::spawn(async move {
            run_notification_legs(email, sms, &filename, user_email.as_deref(), &destination).await
        });

        Ok(Delivery {
            path,
            notifications,
        })
    }
}

/// Run the email leg, then the SMS leg, swallowing each failure
async fn run_notification_legs(
    email: Arc<dyn EmailProvider>,
    sms: Arc<dyn SmsGateway>,
    filename: &str,
    user_email: Option<&str>,
    destination: &str,
) -> NotificationOutcome {
    let email_result = match user_email {
        Some(to) => {
            let subject = "Your Chat Report is Ready";
            let body = format!(
                "<p>Your chat report \"{}\" has been generated and downloaded successfully.</p>\
                 <p>Thank you for using Mindful Chat!</p>",
                filename
            );
            match email.send(to, subject, &body).await {
                Ok(()) => {
                    tracing::info!(to = %to, "Email notification sent");
                    Some(true)
                }
                Err(e) => {
                    tracing::warn!(to = %to, error = %e, "Email notification failed, continuing with SMS");
                    Some(false)
                }
            }
        }
        None => {
            tracing::debug!("No user email provided, skipping email notification");
            None
        }
    };

    let message = format!(
        "Your Mindful Chat report \"{}\" has been generated and downloaded successfully.",
        filename
    );
    let sms_result = match sms.send(destination, &message).await {
        Ok(()) => {
            tracing::info!(destination = %destination, "SMS notification sent");
            true
        }
        Err(e) => {
            tracing::warn!(destination = %destination, error = %e, "SMS notification failed");
            false
        }
    };

    NotificationOutcome {
        email: email_result,
        sms: sms_result,
    }
}
