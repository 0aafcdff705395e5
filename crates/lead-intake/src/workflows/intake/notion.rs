use std::time::Duration;

use serde_json::{json, Map, Value};

use super::domain::LeadFields;
use super::store::{RecordStore, RecordStoreError};
use crate::config::RecordStoreConfig;
use async_trait::async_trait;

const NOTION_PAGES_URL: &str = "https://api.notion.com/v1/pages";
const NOTION_VERSION: &str = "2022-06-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Record store backed by a Notion database. One page per accepted lead.
#[derive(Debug, Clone)]
pub struct NotionRecordStore {
    http: reqwest::Client,
    api_key: String,
    database_id: String,
}

impl NotionRecordStore {
    pub fn new(config: &RecordStoreConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self::with_client(http, config)
    }

    pub fn with_client(http: reqwest::Client, config: &RecordStoreConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            database_id: config.database_id.clone(),
        }
    }
}

#[async_trait]
impl RecordStore for NotionRecordStore {
    async fn create_lead(&self, fields: &LeadFields) -> Result<(), RecordStoreError> {
        let body = json!({
            "parent": { "database_id": &self.database_id },
            "properties": lead_properties(fields),
        });

        let response = self
            .http
            .post(NOTION_PAGES_URL)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|err| RecordStoreError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(RecordStoreError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

/// Map the defaulted lead fields onto the database's property schema.
/// Optional fields are omitted from the map entirely rather than sent empty.
fn lead_properties(fields: &LeadFields) -> Value {
    let mut properties = Map::new();

    properties.insert(
        "Name".to_string(),
        json!({ "title": [{ "text": { "content": &fields.full_name } }] }),
    );
    properties.insert("Email".to_string(), json!({ "email": &fields.email }));
    if let Some(phone) = &fields.phone {
        properties.insert("Phone".to_string(), json!({ "phone_number": phone }));
    }
    properties.insert(
        "Organization".to_string(),
        json!({ "rich_text": [{ "text": { "content": &fields.organization } }] }),
    );
    properties.insert(
        "Industry".to_string(),
        json!({ "select": { "name": &fields.industry } }),
    );
    properties.insert(
        "Experience".to_string(),
        json!({ "select": { "name": &fields.experience } }),
    );
    if let Some(resource) = &fields.resource_downloaded {
        properties.insert(
            "Resource Downloaded".to_string(),
            json!({ "rich_text": [{ "text": { "content": resource } }] }),
        );
    }
    properties.insert(
        "Source".to_string(),
        json!({ "select": { "name": &fields.source } }),
    );
    properties.insert(
        "Date Submitted".to_string(),
        json!({ "date": { "start": fields.submitted_at_iso() } }),
    );

    Value::Object(properties)
}
