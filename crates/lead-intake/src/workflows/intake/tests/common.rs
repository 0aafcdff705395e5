use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::intake::catalog::ResourceCatalog;
use crate::workflows::intake::domain::{LeadFields, LeadSubmission};
use crate::workflows::intake::emails::EmailSettings;
use crate::workflows::intake::notify::{EmailMessage, Notifier, NotifyError};
use crate::workflows::intake::router::intake_router;
use crate::workflows::intake::service::LeadIntakeService;
use crate::workflows::intake::store::{
    AttachmentError, AttachmentStore, RecordStore, RecordStoreError,
};

pub(super) fn settings() -> EmailSettings {
    EmailSettings {
        from_address: "onboarding@resend.dev".to_string(),
        site_url: "https://chapter.example.org".to_string(),
        chapter_name: "C12 Indianapolis".to_string(),
    }
}

pub(super) fn submission() -> LeadSubmission {
    LeadSubmission {
        first_name: "Dana".to_string(),
        last_name: "Whitfield".to_string(),
        email: Some("dana@example.com".to_string()),
        phone: Some("317-555-0100".to_string()),
        organization: Some("Whitfield Manufacturing".to_string()),
        industry: Some("Manufacturing".to_string()),
        experience: Some("10+ years".to_string()),
        resource_downloaded: None,
        source: Some("Resource Download".to_string()),
    }
}

pub(super) fn sparse_submission() -> LeadSubmission {
    LeadSubmission {
        first_name: "Lee".to_string(),
        last_name: "Park".to_string(),
        ..LeadSubmission::default()
    }
}

pub(super) type MemoryService =
    LeadIntakeService<MemoryRecordStore, MemoryNotifier, MemoryAttachments>;

pub(super) fn build_service() -> (
    Arc<MemoryService>,
    Arc<MemoryRecordStore>,
    Arc<MemoryNotifier>,
) {
    let records = Arc::new(MemoryRecordStore::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = Arc::new(LeadIntakeService::new(
        records.clone(),
        notifier.clone(),
        Arc::new(MemoryAttachments::with_catalog_files()),
        ResourceCatalog::standard(),
        settings(),
    ));
    (service, records, notifier)
}

pub(super) fn build_router() -> (axum::Router, Arc<MemoryRecordStore>, Arc<MemoryNotifier>) {
    let (service, records, notifier) = build_service();
    (intake_router(service), records, notifier)
}

#[derive(Default)]
pub(super) struct MemoryRecordStore {
    leads: Mutex<Vec<LeadFields>>,
}

impl MemoryRecordStore {
    pub(super) fn leads(&self) -> Vec<LeadFields> {
        self.leads.lock().expect("record mutex poisoned").clone()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create_lead(&self, fields: &LeadFields) -> Result<(), RecordStoreError> {
        self.leads
            .lock()
            .expect("record mutex poisoned")
            .push(fields.clone());
        Ok(())
    }
}

pub(super) struct UnavailableRecordStore;

#[async_trait]
impl RecordStore for UnavailableRecordStore {
    async fn create_lead(&self, _fields: &LeadFields) -> Result<(), RecordStoreError> {
        Err(RecordStoreError::Transport("database offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryNotifier {
    sent: Mutex<Vec<EmailMessage>>,
}

impl MemoryNotifier {
    pub(super) fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn send(&self, message: EmailMessage) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .expect("notifier mutex poisoned")
            .push(message);
        Ok(())
    }
}

/// Rejects every send while counting attempts, so tests can prove the
/// request outcome is independent of notification failures.
#[derive(Default)]
pub(super) struct FailingNotifier {
    attempts: Mutex<u32>,
}

impl FailingNotifier {
    pub(super) fn attempts(&self) -> u32 {
        *self.attempts.lock().expect("notifier mutex poisoned")
    }
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _message: EmailMessage) -> Result<(), NotifyError> {
        *self.attempts.lock().expect("notifier mutex poisoned") += 1;
        Err(NotifyError::Transport("email service offline".to_string()))
    }
}

pub(super) struct MemoryAttachments {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAttachments {
    pub(super) fn with_catalog_files() -> Self {
        let mut files = HashMap::new();
        for entry in ResourceCatalog::standard().entries() {
            files.insert(entry.filename.to_string(), b"%PDF-1.4 stub".to_vec());
        }
        Self { files }
    }

    pub(super) fn empty() -> Self {
        Self {
            files: HashMap::new(),
        }
    }
}

impl AttachmentStore for MemoryAttachments {
    fn fetch(&self, filename: &str) -> Result<Vec<u8>, AttachmentError> {
        self.files
            .get(filename)
            .cloned()
            .ok_or_else(|| AttachmentError::NotFound {
                filename: filename.to_string(),
                root: "memory".into(),
            })
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
