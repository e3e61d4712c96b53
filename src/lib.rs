//! Chat report generation library
//!
//! Turns one conversation's messages into a shareable, self-contained HTML
//! report annotated with usage statistics and, when someone is signed in,
//! their profile. The rendered document is saved through an injected
//! file-save capability; two independent best-effort notifications (email,
//! SMS) then fire from a detached task.
//!
//! Flow: messages + title → [`report::build_report`] → [`render::render_html`]
//! → [`deliver::Dispatcher::deliver`]. [`services::ReportService`] runs the
//! three steps in one call.

pub mod chat;
pub mod config;
pub mod deliver;
pub mod error;
pub mod notify;
pub mod profile;
pub mod render;
pub mod report;
pub mod services;

pub use chat::{Attachment, AttachmentKind, Message, MessageRole};
pub use config::Config;
pub use deliver::{Delivery, DiskSaver, Dispatcher, FileSaver, NotificationOutcome};
pub use error::ReportError;
pub use profile::{HttpProfileStore, ProfileStore, UserProfile};
pub use render::render_html;
pub use report::{build_report, ChatReport, ReportStats};
pub use services::ReportService;
