use super::*;
use crate::form::types::Category;

fn valid_form() -> FormSubmission {
    FormSubmission::new("John Doe", "john@example.com", "Test message", Category::Contact)
}

fn valid_application() -> TalentApplication {
    TalentApplication {
        name: "Asha Rao".to_owned(),
        email: "asha@example.com".to_owned(),
        linkedin: "https://www.linkedin.com/in/asharao".to_owned(),
        expertise: "Finance & Investment".to_owned(),
        message: String::new(),
    }
}

// =============================================================================
// EMAIL
// =============================================================================

#[test]
fn validate_email_accepts_common_shapes() {
    assert!(validate_email("test@example.com"));
    assert!(validate_email("user.name@domain.co"));
    assert!(validate_email("user+tag@domain.org"));
    assert!(validate_email("  padded@example.com  "));
}

#[test]
fn validate_email_rejects_malformed() {
    assert!(!validate_email("invalid-email"));
    assert!(!validate_email("@domain.com"));
    assert!(!validate_email("user@"));
    assert!(!validate_email(""));
    assert!(!validate_email("user@domain"));
    assert!(!validate_email("user@domain."));
    assert!(!validate_email("user@.com"));
    assert!(!validate_email("a@b@c.com"));
    assert!(!validate_email("us er@domain.com"));
}

// =============================================================================
// CONTACT FORM
// =============================================================================

#[test]
fn validate_accepts_valid_form() {
    let result = validate(&valid_form());
    assert!(result.valid);
    assert!(result.field_errors.is_empty());
}

#[test]
fn validate_rejects_empty_name() {
    let result = validate(&FormSubmission { name: String::new(), ..valid_form() });
    assert!(!result.valid);
    assert_eq!(result.error(Field::Name), Some("Name is required"));
}

#[test]
fn validate_rejects_whitespace_only_name() {
    let result = validate(&FormSubmission { name: " \t\n ".to_owned(), ..valid_form() });
    assert_eq!(result.error(Field::Name), Some("Name is required"));
}

#[test]
fn validate_rejects_name_exceeding_length_limit() {
    let result = validate(&FormSubmission { name: "a".repeat(101), ..valid_form() });
    assert!(!result.valid);
    assert_eq!(result.error(Field::Name), Some("Name must be less than 100 characters"));
}

#[test]
fn validate_accepts_name_at_length_limit_after_trim() {
    let name = format!("  {}  ", "a".repeat(100));
    assert!(validate(&FormSubmission { name, ..valid_form() }).valid);
}

#[test]
fn validate_counts_characters_not_bytes() {
    let name = "é".repeat(100);
    assert!(validate(&FormSubmission { name, ..valid_form() }).valid);
}

#[test]
fn validate_rejects_invalid_email() {
    let result = validate(&FormSubmission { email: "invalid".to_owned(), ..valid_form() });
    assert!(!result.valid);
    assert_eq!(result.error(Field::Email), Some("Please enter a valid email address"));
}

#[test]
fn validate_reports_missing_email_as_required() {
    let result = validate(&FormSubmission { email: "   ".to_owned(), ..valid_form() });
    assert_eq!(result.error(Field::Email), Some("Email is required"));
}

#[test]
fn validate_rejects_empty_message() {
    let result = validate(&FormSubmission { message: String::new(), ..valid_form() });
    assert!(!result.valid);
    assert_eq!(result.error(Field::Message), Some("Message is required"));
}

#[test]
fn validate_rejects_message_exceeding_length_limit() {
    let result = validate(&FormSubmission { message: "a".repeat(5001), ..valid_form() });
    assert!(!result.valid);
    assert_eq!(result.error(Field::Message), Some("Message must be less than 5000 characters"));
}

#[test]
fn validate_reports_every_failing_field_in_one_pass() {
    let result = validate(&FormSubmission::new("", "bad", "hi", Category::Pitch));
    assert!(!result.valid);
    assert!(result.error(Field::Name).is_some());
    assert!(result.error(Field::Email).is_some());
    assert!(result.error(Field::Message).is_none());
    assert_eq!(result.field_errors.len(), 2);
}

#[test]
fn validate_accepts_investor_inquiry() {
    let form = FormSubmission::new("Jane Doe", "jane@firm.com", "We'd like to discuss an investment.", Category::Contact);
    assert!(validate(&form).valid);
}

#[test]
fn validate_is_idempotent() {
    let form = FormSubmission::new(" ", "nope", "x".repeat(6000), Category::Contact);
    assert_eq!(validate(&form), validate(&form));
}

// =============================================================================
// TALENT APPLICATION
// =============================================================================

#[test]
fn validate_talent_accepts_valid_application() {
    assert!(validate_talent(&valid_application()).valid);
}

#[test]
fn validate_talent_requires_linkedin_profile() {
    let result = validate_talent(&TalentApplication { linkedin: String::new(), ..valid_application() });
    assert_eq!(result.error(Field::Linkedin), Some("LinkedIn profile is required"));
}

#[test]
fn validate_talent_rejects_non_linkedin_url() {
    let result =
        validate_talent(&TalentApplication { linkedin: "https://github.com/asha".to_owned(), ..valid_application() });
    assert_eq!(result.error(Field::Linkedin), Some("Please enter a valid LinkedIn URL"));
}

#[test]
fn validate_talent_rejects_unknown_expertise() {
    for expertise in ["", "Astrology"] {
        let result = validate_talent(&TalentApplication { expertise: expertise.to_owned(), ..valid_application() });
        assert_eq!(result.error(Field::Expertise), Some("Please select your primary expertise"));
    }
}

#[test]
fn validate_talent_uses_short_email_message() {
    let result = validate_talent(&TalentApplication { email: "asha@".to_owned(), ..valid_application() });
    assert_eq!(result.error(Field::Email), Some("Please enter a valid email"));
}

#[test]
fn validate_talent_message_is_optional_but_bounded() {
    assert!(validate_talent(&TalentApplication { message: String::new(), ..valid_application() }).valid);
    let result = validate_talent(&TalentApplication { message: "a".repeat(5001), ..valid_application() });
    assert!(result.error(Field::Message).is_some());
}

#[test]
fn validation_result_serializes_field_errors_in_camel_case() {
    let form = FormSubmission::new("", "bad", "hi", Category::Contact);
    let json = serde_json::to_value(validate(&form)).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["fieldErrors"]["name"], "Name is required");
    assert_eq!(json["fieldErrors"]["email"], "Please enter a valid email address");
    assert!(json.get("field_errors").is_none());
}

#[test]
fn validate_talent_has_no_name_length_cap() {
    let result = validate_talent(&TalentApplication { name: "n".repeat(300), ..valid_application() });
    assert!(result.valid, "{result:?}");
}

#[test]
fn validate_talent_checks_email_without_trimming() {
    let result = validate_talent(&TalentApplication { email: " asha@example.com".to_owned(), ..valid_application() });
    assert_eq!(result.error(Field::Email), Some("Please enter a valid email"));

    let contact = FormSubmission { email: " asha@example.com".to_owned(), ..valid_form() };
    assert!(validate(&contact).valid);
}
