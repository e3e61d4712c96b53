//! Delivery module
//!
//! Saving the rendered report through the host file-save capability and then
//! dispatching the two detached notification legs. The save is the one side
//! effect callers can rely on; everything after it is best-effort.

pub mod dispatch;
pub mod saver;

pub use dispatch::{Delivery, Dispatcher, NotificationOutcome};
pub use saver::{DiskSaver, FileSaver};

use thiserror::Error;

/// Errors that can occur while saving a report
#[derive(Error, Debug)]
pub enum DeliverError {
    /// Underlying write failed
    #[error("Failed to save report: {0}")]
    Io(#[from] std::io::Error),

    /// Suggested filename was rejected
    #[error("Invalid report filename: {0}")]
    InvalidFilename(String),
}
