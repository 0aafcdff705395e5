use std::time::Duration;

use serde_json::{json, Map, Value};

use super::notify::{EmailMessage, Notifier, NotifyError};
use async_trait::async_trait;

const RESEND_EMAILS_URL: &str = "https://api.resend.com/emails";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Notifier backed by the Resend transactional email API.
#[derive(Debug, Clone)]
pub struct ResendNotifier {
    http: reqwest::Client,
    api_key: String,
}

impl ResendNotifier {
    pub fn new(api_key: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self::with_client(http, api_key)
    }

    pub fn with_client(http: reqwest::Client, api_key: &str) -> Self {
        Self {
            http,
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn send(&self, message: EmailMessage) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(RESEND_EMAILS_URL)
            .bearer_auth(&self.api_key)
            .json(&send_payload(&message))
            .send()
            .await
            .map_err(|err| NotifyError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotifyError::Backend {
            status: status.as_u16(),
            message: body,
        })
    }
}

/// The `attachments` key is dropped entirely for attachment-free messages.
fn send_payload(message: &EmailMessage) -> Value {
    let mut payload = Map::new();
    payload.insert("from".to_string(), json!(&message.from));
    payload.insert("to".to_string(), json!([&message.to]));
    payload.insert("subject".to_string(), json!(&message.subject));
    payload.insert("html".to_string(), json!(&message.html));

    if !message.attachments.is_empty() {
        let attachments: Vec<Value> = message
            .attachments
            .iter()
            .map(|attachment| {
                json!({
                    "filename": &attachment.filename,
                    "content": &attachment.content,
                })
            })
            .collect();
        payload.insert("attachments".to_string(), Value::Array(attachments));
    }

    Value::Object(payload)
}
