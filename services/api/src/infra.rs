use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use lead_intake::config::AppConfig;
use lead_intake::workflows::intake::{
    EmailSettings, FsAttachmentStore, LeadIntakeService, NotionRecordStore, ResendNotifier,
    ResourceCatalog,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type IntakeService =
    LeadIntakeService<NotionRecordStore, ResendNotifier, FsAttachmentStore>;

/// Wire the concrete SaaS adapters once per process; the reqwest clients
/// inside them pool connections across invocations.
pub(crate) fn build_intake_service(config: &AppConfig) -> Arc<IntakeService> {
    let records = Arc::new(NotionRecordStore::new(&config.record_store));
    let notifier = Arc::new(ResendNotifier::new(&config.email.api_key));
    let attachments = Arc::new(FsAttachmentStore::new(config.email.resource_dir.clone()));

    let settings = EmailSettings {
        from_address: config.email.from_address.clone(),
        site_url: config.email.site_url.clone(),
        chapter_name: config.email.chapter_name.clone(),
    };

    Arc::new(LeadIntakeService::new(
        records,
        notifier,
        attachments,
        ResourceCatalog::standard(),
        settings,
    ))
}
