//! Chat module
//!
//! Conversation data model consumed by the report builder. Messages are owned
//! by the calling application; this crate only reads them.

pub mod models;

pub use models::{Attachment, AttachmentKind, Message, MessageRole};
