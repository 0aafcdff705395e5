use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;
use tracing::{info, warn};

use super::catalog::ResourceCatalog;
use super::domain::{ConfirmationKind, LeadFields, LeadSubmission};
use super::emails::{confirmation_email, resource_email, EmailSettings};
use super::notify::{EmailAttachment, Notifier, NotifyError};
use super::store::{AttachmentError, AttachmentStore, RecordStore, RecordStoreError};

/// Service composing the record store, notifier, and attachment store.
///
/// The record write commits the lead; every notification afterwards is
/// fire-and-forget with a logged outcome.
pub struct LeadIntakeService<R, N, A> {
    records: Arc<R>,
    notifier: Arc<N>,
    attachments: Arc<A>,
    catalog: ResourceCatalog,
    settings: EmailSettings,
}

impl<R, N, A> LeadIntakeService<R, N, A>
where
    R: RecordStore + 'static,
    N: Notifier + 'static,
    A: AttachmentStore + 'static,
{
    pub fn new(
        records: Arc<R>,
        notifier: Arc<N>,
        attachments: Arc<A>,
        catalog: ResourceCatalog,
        settings: EmailSettings,
    ) -> Self {
        Self {
            records,
            notifier,
            attachments,
            catalog,
            settings,
        }
    }

    /// Accept one submission: write the lead record, then attempt the
    /// attachment and confirmation emails for submitters who left an address.
    ///
    /// Calling twice with identical input creates two records and may send
    /// duplicate emails; the form carries no deduplication key.
    pub async fn submit(&self, submission: LeadSubmission) -> Result<(), LeadIntakeError> {
        let fields = LeadFields::from_submission(&submission, Utc::now());
        self.records.create_lead(&fields).await?;
        info!(source = %fields.source, "lead recorded");

        let Some(email) = submission.notification_email() else {
            return Ok(());
        };

        if let Some(title) = submission.resource_title() {
            match self
                .send_resource_email(email, &submission.first_name, title)
                .await
            {
                Ok(true) => info!(resource = title, "resource email sent"),
                Ok(false) => info!(resource = title, "resource not in catalog, email skipped"),
                Err(err) => warn!(resource = title, error = %err, "resource email failed"),
            }
        }

        if let Some(kind) = submission.confirmation_kind() {
            match self
                .send_confirmation_email(email, &submission.first_name, kind)
                .await
            {
                Ok(()) => info!(source = kind.label(), "confirmation email sent"),
                Err(err) => {
                    warn!(source = kind.label(), error = %err, "confirmation email failed")
                }
            }
        }

        Ok(())
    }

    /// Returns `Ok(false)` when the title has no catalog entry; that is a
    /// silent skip, not a failure.
    async fn send_resource_email(
        &self,
        email: &str,
        first_name: &str,
        title: &str,
    ) -> Result<bool, NotificationError> {
        let Some(filename) = self.catalog.attachment_for(title) else {
            return Ok(false);
        };

        let bytes = self.attachments.fetch(filename)?;
        let attachment = EmailAttachment {
            filename: filename.to_string(),
            content: BASE64.encode(bytes),
        };

        let message = resource_email(&self.settings, email, first_name, title, attachment);
        self.notifier.send(message).await?;
        Ok(true)
    }

    async fn send_confirmation_email(
        &self,
        email: &str,
        first_name: &str,
        kind: ConfirmationKind,
    ) -> Result<(), NotificationError> {
        let message = confirmation_email(&self.settings, email, first_name, kind);
        self.notifier.send(message).await?;
        Ok(())
    }
}

/// Error surfaced to the caller. Only the record-store write can fail a
/// submission; notification failures are logged at the attempt site.
#[derive(Debug, thiserror::Error)]
pub enum LeadIntakeError {
    #[error(transparent)]
    RecordStore(#[from] RecordStoreError),
}

#[derive(Debug, thiserror::Error)]
enum NotificationError {
    #[error(transparent)]
    Attachment(#[from] AttachmentError),
    #[error(transparent)]
    Send(#[from] NotifyError),
}
