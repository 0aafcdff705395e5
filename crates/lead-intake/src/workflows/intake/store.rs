use async_trait::async_trait;
use std::path::PathBuf;

use super::domain::LeadFields;

/// Storage abstraction over the external system of record for leads, so the
/// service module can be exercised in isolation.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create_lead(&self, fields: &LeadFields) -> Result<(), RecordStoreError>;
}

/// Error enumeration for record-store failures. Always fatal to the request.
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("record store rejected the lead ({status}): {message}")]
    Backend { status: u16, message: String },
    #[error("record store unreachable: {0}")]
    Transport(String),
}

/// Read-only lookup of resource attachment bytes by catalog filename.
pub trait AttachmentStore: Send + Sync {
    fn fetch(&self, filename: &str) -> Result<Vec<u8>, AttachmentError>;
}

/// Error enumeration for attachment retrieval. Never fatal to the request.
#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("attachment {filename} not found under {root}")]
    NotFound { filename: String, root: PathBuf },
    #[error("attachment {filename} unreadable: {source}")]
    Io {
        filename: String,
        source: std::io::Error,
    },
}
