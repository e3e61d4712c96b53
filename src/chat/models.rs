//! Chat data models
//!
//! Defines structures for messages and attachments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user
    User,
    /// Message from the assistant/AI
    Assistant,
}

impl MessageRole {
    /// Convert the role to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl From<&str> for MessageRole {
    fn from(s: &str) -> Self {
        match s {
            "user" => MessageRole::User,
            "assistant" => MessageRole::Assistant,
            _ => MessageRole::User,
        }
    }
}

/// Declared kind of an attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    /// Image attachment, rendered inline in reports
    Image,
    /// Any other file, rendered as a generic attachment block
    File,
}

/// A file attached to a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name
    pub name: String,
    /// URL the file can be fetched from
    pub url: String,
    /// File size in bytes
    pub size: u64,
    /// Declared kind
    pub kind: AttachmentKind,
}

impl Attachment {
    /// Whether the attachment should be rendered as an inline image
    ///
    /// True when the declared kind is `Image` or the file name carries a
    /// common image extension. The extension check covers uploads whose kind
    /// was never classified by the client.
    pub fn is_image(&self) -> bool {
        if self.kind == AttachmentKind::Image {
            return true;
        }
        let name = self.name.to_ascii_lowercase();
        [".jpeg", ".jpg", ".gif", ".png"]
            .iter()
            .any(|ext| name.ends_with(ext))
    }
}

/// A single message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
    /// Optional file attachment
    pub attachment: Option<Attachment>,
}

impl Message {
    /// Create a new message without an attachment
    pub fn new(role: MessageRole, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
            attachment: None,
        }
    }

    /// Attach a file to the message
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}
