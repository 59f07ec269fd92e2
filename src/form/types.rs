//! Form values, validation results and submission outcomes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Longest accepted name or email, in characters.
pub const MAX_NAME_CHARS: usize = 100;
/// Longest accepted message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 5000;

pub const SUCCESS_MESSAGE: &str = "Thank you for your submission. We will respond promptly.";
pub const TALENT_SUCCESS_MESSAGE: &str =
    "Application received. We review all submissions personally and will reach out if there is alignment.";
pub const REJECTED_MESSAGE: &str = "Submission failed. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Options offered by the talent application's expertise selector.
pub const EXPERTISE_AREAS: [&str; 9] = [
    "Technology & Engineering",
    "Finance & Investment",
    "Operations & Strategy",
    "Legal & Compliance",
    "Marketing & Growth",
    "Design & Creative",
    "Sales & Partnerships",
    "Data & Analytics",
    "Other",
];

// =============================================================================
// FIELDS
// =============================================================================

/// Addressable input of a form. Error maps are keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
    Linkedin,
    Expertise,
}

impl Field {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
            Self::Linkedin => "linkedin",
            Self::Expertise => "expertise",
        }
    }
}

/// Which inbox a contact-page submission is routed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Contact,
    #[default]
    Pitch,
}

impl Category {
    /// Subject line the provider uses for the notification email.
    #[must_use]
    pub fn subject(self) -> &'static str {
        match self {
            Self::Pitch => "New Venture Pitch",
            Self::Contact => "Contact Form Submission",
        }
    }
}

// =============================================================================
// FORM VALUES
// =============================================================================

/// Contact or pitch message as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub category: Category,
}

impl FormSubmission {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>, category: Category) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into(), category }
    }
}

/// Application submitted from the join page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentApplication {
    pub name: String,
    pub email: String,
    pub linkedin: String,
    pub expertise: String,
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// RESULTS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    /// Only failing fields are present.
    pub field_errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    #[must_use]
    pub fn from_errors(field_errors: BTreeMap<Field, String>) -> Self {
        Self { valid: field_errors.is_empty(), field_errors }
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }
}

/// Per-field errors reported by the provider, keyed by the provider's field name.
pub type ServerErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub succeeded: bool,
    pub display_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<ServerErrors>,
}

impl SubmissionOutcome {
    #[must_use]
    pub fn success(message: &str) -> Self {
        Self { succeeded: true, display_message: message.to_owned(), field_errors: None }
    }

    #[must_use]
    pub fn rejected(field_errors: Option<ServerErrors>) -> Self {
        Self { succeeded: false, display_message: REJECTED_MESSAGE.to_owned(), field_errors }
    }

    #[must_use]
    pub fn network_error() -> Self {
        Self { succeeded: false, display_message: NETWORK_ERROR_MESSAGE.to_owned(), field_errors: None }
    }
}
