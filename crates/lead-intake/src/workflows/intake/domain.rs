use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Raw lead-capture form payload as posted by the marketing site.
///
/// Every field is defaulted so a sparse body still deserializes; the form is
/// not validated here. The record store remains the enforcement point for
/// malformed leads, matching the site's historical behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub resource_downloaded: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl LeadSubmission {
    /// Email address gating every notification branch. Empty strings count as
    /// absent, mirroring the form's loose truthiness semantics.
    pub fn notification_email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    pub fn resource_title(&self) -> Option<&str> {
        non_empty(self.resource_downloaded.as_deref())
    }

    pub fn confirmation_kind(&self) -> Option<ConfirmationKind> {
        ConfirmationKind::from_source(self.source.as_deref().unwrap_or_default())
    }
}

/// The explicit, already-defaulted payload written to the record store.
///
/// `phone` and `resource_downloaded` stay optional: the outbound record must
/// omit those properties entirely when absent rather than send empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadFields {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: String,
    pub industry: String,
    pub experience: String,
    pub resource_downloaded: Option<String>,
    pub source: String,
    pub submitted_at: DateTime<Utc>,
}

impl LeadFields {
    pub fn from_submission(submission: &LeadSubmission, submitted_at: DateTime<Utc>) -> Self {
        Self {
            full_name: format!("{} {}", submission.first_name, submission.last_name),
            email: non_empty(submission.email.as_deref()).map(str::to_string),
            phone: non_empty(submission.phone.as_deref()).map(str::to_string),
            organization: non_empty(submission.organization.as_deref())
                .unwrap_or_default()
                .to_string(),
            industry: non_empty(submission.industry.as_deref())
                .unwrap_or("Not specified")
                .to_string(),
            experience: non_empty(submission.experience.as_deref())
                .unwrap_or("Not specified")
                .to_string(),
            resource_downloaded: submission.resource_title().map(str::to_string),
            source: non_empty(submission.source.as_deref())
                .unwrap_or("Unknown")
                .to_string(),
            submitted_at,
        }
    }

    /// ISO-8601 UTC timestamp with millisecond precision.
    pub fn submitted_at_iso(&self) -> String {
        self.submitted_at
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Submission sources that earn a templated confirmation email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationKind {
    ContactForm,
    ExecutiveBriefing,
}

impl ConfirmationKind {
    /// Exact literal match only; any other source sends no confirmation.
    pub fn from_source(source: &str) -> Option<Self> {
        match source {
            "Contact Form" => Some(Self::ContactForm),
            "Executive Briefing" => Some(Self::ExecutiveBriefing),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ContactForm => "Contact Form",
            Self::ExecutiveBriefing => "Executive Briefing",
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
