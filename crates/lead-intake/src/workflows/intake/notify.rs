use async_trait::async_trait;

/// A single transactional email ready for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<EmailAttachment>,
}

/// Attachment content is already base64-encoded for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAttachment {
    pub filename: String,
    pub content: String,
}

/// Outbound email hook. Implementations report only whether the send call
/// itself completed; no delivery guarantee is awaited.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), NotifyError>;
}

/// Error enumeration for notification dispatch. Callers log and continue.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("email service rejected the message ({status}): {message}")]
    Backend { status: u16, message: String },
    #[error("email service unreachable: {0}")]
    Transport(String),
}
