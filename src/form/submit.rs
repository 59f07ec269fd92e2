//! Remote submission to the form provider.
//!
//! DESIGN
//! ======
//! One `POST {base}/f/{endpoint_id}` per submission with a JSON body and
//! JSON `Accept`. No retry and no client-side timeout beyond the transport
//! default. The HTTP status is the success signal; the response body is
//! only mined for per-field errors and may be missing or malformed.
//!
//! ERROR HANDLING
//! ==============
//! Internally failures are typed as [`SubmitError`]. The public submit
//! functions fold them into a [`SubmissionOutcome`] so the page always gets
//! a displayable result and never an error.

use reqwest::header::ACCEPT;
use serde::Serialize;
use tracing::{info, warn};

use super::types::{
    Category, FormSubmission, MAX_MESSAGE_CHARS, MAX_NAME_CHARS, ServerErrors, SUCCESS_MESSAGE,
    SubmissionOutcome, TALENT_SUCCESS_MESSAGE, TalentApplication,
};
use crate::config::FormConfig;

const TALENT_SUBJECT: &str = "New Talent Protocol Application";
const TALENT_TYPE: &str = "talent-protocol";
/// Key used for provider errors that are not tied to a field.
const FORM_LEVEL_KEY: &str = "form";

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("provider rejected submission: status {status}")]
    Rejected { status: u16, errors: Option<ServerErrors> },
}

impl SubmitError {
    fn into_outcome(self) -> SubmissionOutcome {
        match self {
            Self::Rejected { errors, .. } => SubmissionOutcome::rejected(errors),
            Self::Transport(_) | Self::ClientBuild(_) => SubmissionOutcome::network_error(),
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct ContactPayload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    #[serde(rename = "_subject")]
    subject: &'static str,
    category: Category,
}

#[derive(Debug, Serialize)]
struct TalentPayload<'a> {
    name: &'a str,
    email: &'a str,
    linkedin: &'a str,
    expertise: &'a str,
    message: &'a str,
    #[serde(rename = "_subject")]
    subject: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct FormClient {
    http: reqwest::Client,
    base_url: String,
}

impl FormClient {
    /// Build a client posting to `base_url` (for example `https://formspree.io`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| SubmitError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &FormConfig) -> Result<Self, SubmitError> {
        Self::new(&config.base_url)
    }

    #[must_use]
    pub fn endpoint_url(&self, endpoint_id: &str) -> String {
        format!("{}/f/{endpoint_id}", self.base_url)
    }

    /// Sanitize a contact or pitch submission and post it.
    ///
    /// Callers are expected to have run [`super::validate`] first; the
    /// trimming and truncation here only guard against callers that did not.
    pub async fn sanitize_and_submit(&self, endpoint_id: &str, submission: &FormSubmission) -> SubmissionOutcome {
        let clean = sanitize(submission);
        let payload = ContactPayload {
            name: &clean.name,
            email: &clean.email,
            message: &clean.message,
            subject: clean.category.subject(),
            category: clean.category,
        };
        match self.post(endpoint_id, &payload).await {
            Ok(()) => {
                info!(endpoint_id, category = ?clean.category, "form submitted");
                SubmissionOutcome::success(SUCCESS_MESSAGE)
            }
            Err(e) => {
                warn!(endpoint_id, error = %e, "form submission failed");
                e.into_outcome()
            }
        }
    }

    /// Post a talent application from the join page.
    pub async fn submit_talent(&self, endpoint_id: &str, application: &TalentApplication) -> SubmissionOutcome {
        let payload = TalentPayload {
            name: truncate_chars(application.name.trim(), MAX_NAME_CHARS),
            email: truncate_chars(application.email.trim(), MAX_NAME_CHARS),
            linkedin: application.linkedin.trim(),
            expertise: application.expertise.trim(),
            message: truncate_chars(application.message.trim(), MAX_MESSAGE_CHARS),
            subject: TALENT_SUBJECT,
            kind: TALENT_TYPE,
        };
        match self.post(endpoint_id, &payload).await {
            Ok(()) => {
                info!(endpoint_id, "talent application submitted");
                SubmissionOutcome::success(TALENT_SUCCESS_MESSAGE)
            }
            Err(e) => {
                warn!(endpoint_id, error = %e, "talent application failed");
                e.into_outcome()
            }
        }
    }

    async fn post<T: Serialize>(&self, endpoint_id: &str, payload: &T) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(self.endpoint_url(endpoint_id))
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_else(|e| {
            warn!(error = %e, "failed to read rejection body");
            String::new()
        });
        Err(SubmitError::Rejected { status: status.as_u16(), errors: parse_server_errors(&body) })
    }
}

// =============================================================================
// SANITIZING
// =============================================================================

/// Trimmed copy of `submission` with name and email capped at 100 characters
/// and the message at 5000.
#[must_use]
pub fn sanitize(submission: &FormSubmission) -> FormSubmission {
    FormSubmission {
        name: truncate_chars(submission.name.trim(), MAX_NAME_CHARS).to_owned(),
        email: truncate_chars(submission.email.trim(), MAX_NAME_CHARS).to_owned(),
        message: truncate_chars(submission.message.trim(), MAX_MESSAGE_CHARS).to_owned(),
        category: submission.category,
    }
}

fn truncate_chars(value: &str, max_chars: usize) -> &str {
    value
        .char_indices()
        .nth(max_chars)
        .map_or(value, |(idx, _)| &value[..idx])
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract per-field errors from a rejection body.
///
/// Accepts `{"errors": {"email": ["..."]}}` as well as the provider's list
/// form `{"errors": [{"field": "email", "message": "..."}]}`. Entries with no
/// field are grouped under `form`. Returns `None` when nothing usable is found.
fn parse_server_errors(body: &str) -> Option<ServerErrors> {
    let root: serde_json::Value = serde_json::from_str(body).ok()?;
    let errors = root.get("errors")?;
    let mut out = ServerErrors::new();

    if let Some(map) = errors.as_object() {
        for (field, value) in map {
            let messages = match value {
                serde_json::Value::String(s) => vec![s.clone()],
                serde_json::Value::Array(items) => {
                    items.iter().filter_map(|v| v.as_str().map(str::to_owned)).collect()
                }
                _ => Vec::new(),
            };
            if !messages.is_empty() {
                out.entry(field.clone()).or_default().extend(messages);
            }
        }
    } else if let Some(items) = errors.as_array() {
        for item in items {
            let Some(message) = item.get("message").and_then(serde_json::Value::as_str) else {
                continue;
            };
            let field = item
                .get("field")
                .and_then(serde_json::Value::as_str)
                .unwrap_or(FORM_LEVEL_KEY);
            out.entry(field.to_owned()).or_default().push(message.to_owned());
        }
    }

    (!out.is_empty()).then_some(out)
}

#[cfg(test)]
#[path = "submit_test.rs"]
mod tests;
