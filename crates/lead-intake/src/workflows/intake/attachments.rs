use std::path::{Path, PathBuf};

use super::store::{AttachmentError, AttachmentStore};

/// Resource PDFs served from a local read-only directory. Files are read per
/// request; concurrent lookups need no synchronization.
#[derive(Debug, Clone)]
pub struct FsAttachmentStore {
    root: PathBuf,
}

impl FsAttachmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AttachmentStore for FsAttachmentStore {
    fn fetch(&self, filename: &str) -> Result<Vec<u8>, AttachmentError> {
        let path = self.root.join(filename);
        std::fs::read(&path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => AttachmentError::NotFound {
                filename: filename.to_string(),
                root: self.root.clone(),
            },
            _ => AttachmentError::Io {
                filename: filename.to_string(),
                source,
            },
        })
    }
}
