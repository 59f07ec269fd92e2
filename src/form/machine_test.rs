use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::form::types::{Category, NETWORK_ERROR_MESSAGE, REJECTED_MESSAGE, SUCCESS_MESSAGE};

fn pitch_form() -> FormState<FormSubmission> {
    FormState::new(FormSubmission { category: Category::Pitch, ..FormSubmission::default() })
}

fn fill_valid(form: &mut FormState<FormSubmission>) {
    form.edit(Field::Name, "Jane Doe");
    form.edit(Field::Email, "jane@firm.com");
    form.edit(Field::Message, "We'd like to discuss an investment.");
}

#[test]
fn new_form_is_idle_and_enabled() {
    let form = pitch_form();
    assert_eq!(form.phase(), FormPhase::Idle);
    assert!(form.submit_enabled());
    assert!(form.errors().is_empty());
    assert!(form.result().is_none());
}

#[test]
fn begin_submit_with_invalid_values_returns_to_idle_with_errors() {
    let mut form = pitch_form();
    form.edit(Field::Email, "bad");
    form.edit(Field::Message, "hi");

    let err = form.begin_submit().unwrap_err();
    assert!(matches!(&err, SubmitRejected::Invalid(v) if !v.valid));
    assert_eq!(form.phase(), FormPhase::Idle);
    assert!(form.error(Field::Name).is_some());
    assert!(form.error(Field::Email).is_some());
    assert!(form.error(Field::Message).is_none());
}

#[test]
fn edit_clears_only_that_fields_error() {
    let mut form = pitch_form();
    let _ = form.begin_submit();
    assert_eq!(form.errors().len(), 3);

    form.edit(Field::Email, "still bad");
    assert!(form.error(Field::Email).is_none());
    assert!(form.error(Field::Name).is_some());
    assert!(form.error(Field::Message).is_some());
}

#[test]
fn begin_submit_twice_is_rejected_while_in_flight() {
    let mut form = pitch_form();
    fill_valid(&mut form);

    let values = form.begin_submit().unwrap();
    assert_eq!(values.name, "Jane Doe");
    assert_eq!(form.phase(), FormPhase::Submitting);
    assert!(!form.submit_enabled());
    assert_eq!(form.begin_submit().unwrap_err(), SubmitRejected::InFlight);
}

#[test]
fn edits_are_ignored_while_submitting() {
    let mut form = pitch_form();
    fill_valid(&mut form);
    form.begin_submit().unwrap();

    form.edit(Field::Name, "Someone Else");
    assert_eq!(form.values().name, "Jane Doe");
}

#[test]
fn finish_success_resets_fields_but_keeps_category() {
    let mut form = pitch_form();
    fill_valid(&mut form);
    form.begin_submit().unwrap();

    form.finish(SubmissionOutcome::success(SUCCESS_MESSAGE)).unwrap();
    assert_eq!(form.phase(), FormPhase::Succeeded);
    assert!(form.submit_enabled());
    assert_eq!(form.values(), &FormSubmission { category: Category::Pitch, ..FormSubmission::default() });
    assert_eq!(form.result().map(|r| r.display_message.as_str()), Some(SUCCESS_MESSAGE));
}

#[test]
fn finish_failure_keeps_values_for_retry() {
    let mut form = pitch_form();
    fill_valid(&mut form);
    form.begin_submit().unwrap();

    form.finish(SubmissionOutcome::network_error()).unwrap();
    assert_eq!(form.phase(), FormPhase::Failed);
    assert_eq!(form.values().email, "jane@firm.com");

    // Retry goes straight back through validation.
    form.begin_submit().unwrap();
    assert_eq!(form.phase(), FormPhase::Submitting);
}

#[test]
fn finish_without_request_is_rejected() {
    let mut form = pitch_form();
    assert_eq!(
        form.finish(SubmissionOutcome::success(SUCCESS_MESSAGE)).unwrap_err(),
        SubmitRejected::NotSubmitting
    );
}

#[test]
fn edit_after_result_returns_to_idle() {
    let mut form = pitch_form();
    fill_valid(&mut form);
    form.begin_submit().unwrap();
    form.finish(SubmissionOutcome::rejected(None)).unwrap();

    form.edit(Field::Message, "Second try");
    assert_eq!(form.phase(), FormPhase::Idle);
    assert!(form.result().is_some());

    form.dismiss();
    assert!(form.result().is_none());
}

#[test]
fn talent_form_routes_all_fields() {
    let mut form = FormState::new(TalentApplication::default());
    form.edit(Field::Name, "Asha Rao");
    form.edit(Field::Email, "asha@example.com");
    form.edit(Field::Linkedin, "linkedin.com/in/asha");
    form.edit(Field::Expertise, "Other");
    assert!(form.begin_submit().is_ok());
}

#[test]
fn contact_form_ignores_talent_only_fields() {
    let mut form = pitch_form();
    form.edit(Field::Linkedin, "linkedin.com/in/jane");
    assert_eq!(form.values(), &FormSubmission { category: Category::Pitch, ..FormSubmission::default() });
}

#[tokio::test]
async fn submit_runs_full_cycle_against_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;
    let client = FormClient::new(&server.uri()).unwrap();

    let mut form = pitch_form();
    fill_valid(&mut form);
    let outcome = form.submit(&client, "pitch1").await.unwrap();
    assert!(outcome.succeeded);
    assert_eq!(outcome.display_message, SUCCESS_MESSAGE);
    assert_eq!(form.values().name, "");
    assert!(form.submit_enabled());
}

#[tokio::test]
async fn submit_records_rejection_and_reenables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;
    let client = FormClient::new(&server.uri()).unwrap();

    let mut form = pitch_form();
    fill_valid(&mut form);
    let outcome = form.submit(&client, "pitch1").await.unwrap().clone();
    assert_eq!(outcome.display_message, REJECTED_MESSAGE);
    assert_eq!(form.phase(), FormPhase::Failed);
    assert!(form.submit_enabled());
}

#[tokio::test]
async fn submit_invalid_form_never_reaches_network() {
    let client = FormClient::new("http://127.0.0.1:1").unwrap();
    let mut form = pitch_form();
    let err = form.submit(&client, "pitch1").await.unwrap_err();
    assert!(matches!(err, SubmitRejected::Invalid(_)));
    assert!(form.result().is_none());
}

#[tokio::test]
async fn submit_transport_failure_is_recorded() {
    let client = FormClient::new("http://127.0.0.1:1").unwrap();
    let mut form = pitch_form();
    fill_valid(&mut form);
    let outcome = form.submit(&client, "pitch1").await.unwrap();
    assert_eq!(outcome.display_message, NETWORK_ERROR_MESSAGE);
}
