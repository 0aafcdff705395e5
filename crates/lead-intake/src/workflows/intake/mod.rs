//! Lead intake: one form submission in, one record-store write, and up to two
//! best-effort notification emails out.
//!
//! The record write is the only fatal step. Notification branches are guarded
//! independently so a failed send never rolls back or re-surfaces against the
//! already-committed lead.

pub mod attachments;
pub mod catalog;
pub mod domain;
pub mod emails;
pub mod notify;
pub mod notion;
pub mod resend;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use attachments::FsAttachmentStore;
pub use catalog::{ResourceCatalog, ResourceEntry};
pub use domain::{ConfirmationKind, LeadFields, LeadSubmission};
pub use emails::EmailSettings;
pub use notify::{EmailAttachment, EmailMessage, Notifier, NotifyError};
pub use notion::NotionRecordStore;
pub use resend::ResendNotifier;
pub use router::intake_router;
pub use service::{LeadIntakeError, LeadIntakeService};
pub use store::{AttachmentError, AttachmentStore, RecordStore, RecordStoreError};
