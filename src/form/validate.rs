//! Local field validation.
//!
//! Every rule runs on every call; a form with three bad fields reports all
//! three at once. Lengths are measured on trimmed input in characters.

use std::collections::BTreeMap;

use super::types::{
    EXPERTISE_AREAS, Field, FormSubmission, MAX_MESSAGE_CHARS, MAX_NAME_CHARS, TalentApplication, ValidationResult,
};

/// Check the `local@domain.tld` shape: no whitespace, exactly one `@`, a
/// non-empty local part, and a domain with a `.` that has at least one
/// character on each side. Surrounding whitespace is ignored.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    is_email_shape(email.trim())
}

/// [`validate_email`] without the trim: any whitespace fails.
fn is_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate a contact or pitch submission.
#[must_use]
pub fn validate(submission: &FormSubmission) -> ValidationResult {
    let mut errors = BTreeMap::new();

    if let Some(err) = check_name(&submission.name) {
        errors.insert(Field::Name, err.to_owned());
    }

    if submission.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".to_owned());
    } else if !validate_email(&submission.email) {
        errors.insert(Field::Email, "Please enter a valid email address".to_owned());
    }

    let message = submission.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, "Message is required".to_owned());
    } else if exceeds(message, MAX_MESSAGE_CHARS) {
        errors.insert(Field::Message, message_too_long());
    }

    ValidationResult::from_errors(errors)
}

/// Validate a talent application from the join page.
///
/// Looser on the name than the contact form (no length cap) and stricter on
/// the email, whose shape is checked on the raw value.
#[must_use]
pub fn validate_talent(application: &TalentApplication) -> ValidationResult {
    let mut errors = BTreeMap::new();

    if application.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required".to_owned());
    }

    if application.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".to_owned());
    } else if !is_email_shape(&application.email) {
        errors.insert(Field::Email, "Please enter a valid email".to_owned());
    }

    let linkedin = application.linkedin.trim();
    if linkedin.is_empty() {
        errors.insert(Field::Linkedin, "LinkedIn profile is required".to_owned());
    } else if !linkedin.to_ascii_lowercase().contains("linkedin.com") {
        errors.insert(Field::Linkedin, "Please enter a valid LinkedIn URL".to_owned());
    }

    if !EXPERTISE_AREAS.contains(&application.expertise.trim()) {
        errors.insert(Field::Expertise, "Please select your primary expertise".to_owned());
    }

    if exceeds(application.message.trim(), MAX_MESSAGE_CHARS) {
        errors.insert(Field::Message, message_too_long());
    }

    ValidationResult::from_errors(errors)
}

fn check_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    if name.is_empty() {
        Some("Name is required")
    } else if exceeds(name, MAX_NAME_CHARS) {
        Some("Name must be less than 100 characters")
    } else {
        None
    }
}

fn message_too_long() -> String {
    format!("Message must be less than {MAX_MESSAGE_CHARS} characters")
}

fn exceeds(value: &str, max_chars: usize) -> bool {
    value.chars().nth(max_chars).is_some()
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
