//! Per-form submission state machine.
//!
//! ```text
//! Idle -> Validating -> Idle (with errors)
//!                    -> Submitting -> Succeeded | Failed -> Idle
//! ```
//!
//! The page holds one [`FormState`] per form, calls [`FormState::edit`] on
//! input events, [`FormState::begin_submit`] when the trigger is pressed and
//! [`FormState::finish`] when the request settles, re-rendering after each.
//! [`FormState::submit`] runs the whole sequence for hosts that can await
//! inline.

use std::collections::BTreeMap;

use tracing::debug;

use super::submit::FormClient;
use super::types::{Field, FormSubmission, SubmissionOutcome, TalentApplication, ValidationResult};
use super::validate::{validate, validate_talent};

// =============================================================================
// FORM MODEL
// =============================================================================

/// Values of one kind of form, with the rules that apply to them.
pub trait FormModel: Clone {
    fn validate(&self) -> ValidationResult;

    /// Overwrite one field. Fields the model does not have are ignored.
    fn set_field(&mut self, field: Field, value: String);

    /// Empty values to show after a successful submission.
    #[must_use]
    fn cleared(&self) -> Self;
}

impl FormModel for FormSubmission {
    fn validate(&self) -> ValidationResult {
        validate(self)
    }

    fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
            Field::Linkedin | Field::Expertise => {}
        }
    }

    fn cleared(&self) -> Self {
        Self { category: self.category, ..Self::default() }
    }
}

impl FormModel for TalentApplication {
    fn validate(&self) -> ValidationResult {
        validate_talent(self)
    }

    fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
            Field::Linkedin => self.linkedin = value,
            Field::Expertise => self.expertise = value,
        }
    }

    fn cleared(&self) -> Self {
        Self::default()
    }
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Why a submit attempt did not start a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    /// A request for this form is still in flight.
    #[error("a submission is already in progress")]
    InFlight,

    /// Local validation failed; errors are now shown on the form.
    #[error("{} field(s) failed validation", .0.field_errors.len())]
    Invalid(ValidationResult),

    /// `finish` was called without a request in flight.
    #[error("no submission in progress")]
    NotSubmitting,
}

#[derive(Debug, Clone, Default)]
pub struct FormState<M> {
    values: M,
    errors: BTreeMap<Field, String>,
    phase: FormPhase,
    result: Option<SubmissionOutcome>,
}

impl<M: FormModel> FormState<M> {
    #[must_use]
    pub fn new(values: M) -> Self {
        Self { values, errors: BTreeMap::new(), phase: FormPhase::Idle, result: None }
    }

    #[must_use]
    pub fn values(&self) -> &M {
        &self.values
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// Result banner of the last settled submission.
    #[must_use]
    pub fn result(&self) -> Option<&SubmissionOutcome> {
        self.result.as_ref()
    }

    /// Whether the submit trigger and inputs accept interaction.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.phase != FormPhase::Submitting
    }

    /// Apply an input change. A visible error on this field is dropped
    /// without re-running validation. Ignored while submitting.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if self.phase == FormPhase::Submitting {
            return;
        }
        self.settle_to_idle();
        self.values.set_field(field, value.into());
        self.errors.remove(&field);
    }

    /// Validate and, if the form is clean, enter `Submitting`.
    ///
    /// Returns the values to send.
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::InFlight`] while a request is outstanding, or
    /// [`SubmitRejected::Invalid`] after validation fails (the form is back
    /// in `Idle` with its field errors set).
    pub fn begin_submit(&mut self) -> Result<M, SubmitRejected> {
        if self.phase == FormPhase::Submitting {
            return Err(SubmitRejected::InFlight);
        }
        self.settle_to_idle();

        self.phase = FormPhase::Validating;
        let validation = self.values.validate();
        if !validation.valid {
            debug!(failing = validation.field_errors.len(), "form validation failed");
            self.errors.clone_from(&validation.field_errors);
            self.phase = FormPhase::Idle;
            return Err(SubmitRejected::Invalid(validation));
        }

        self.errors.clear();
        self.phase = FormPhase::Submitting;
        Ok(self.values.clone())
    }

    /// Record the settled request. A success clears the inputs.
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::NotSubmitting`] if no request was in flight.
    pub fn finish(&mut self, outcome: SubmissionOutcome) -> Result<(), SubmitRejected> {
        if self.phase != FormPhase::Submitting {
            return Err(SubmitRejected::NotSubmitting);
        }
        if outcome.succeeded {
            self.values = self.values.cleared();
            self.phase = FormPhase::Succeeded;
        } else {
            self.phase = FormPhase::Failed;
        }
        self.result = Some(outcome);
        Ok(())
    }

    /// Hide the result banner and return to `Idle`.
    pub fn dismiss(&mut self) {
        self.settle_to_idle();
        self.result = None;
    }

    fn settle_to_idle(&mut self) {
        if matches!(self.phase, FormPhase::Succeeded | FormPhase::Failed) {
            self.phase = FormPhase::Idle;
        }
    }
}

impl<M: FormModel + Submittable> FormState<M> {
    /// Validate, post and record the outcome in one call.
    ///
    /// # Errors
    ///
    /// Only the local rejections of [`FormState::begin_submit`]; remote
    /// failures are recorded as the form's result.
    pub async fn submit(&mut self, client: &FormClient, endpoint_id: &str) -> Result<&SubmissionOutcome, SubmitRejected> {
        let values = self.begin_submit()?;
        let outcome = values.send(client, endpoint_id).await;
        self.finish(outcome)?;
        self.result.as_ref().ok_or(SubmitRejected::NotSubmitting)
    }
}

/// Form values that know which provider call carries them.
pub trait Submittable {
    fn send(&self, client: &FormClient, endpoint_id: &str) -> impl Future<Output = SubmissionOutcome>;
}

impl Submittable for FormSubmission {
    fn send(&self, client: &FormClient, endpoint_id: &str) -> impl Future<Output = SubmissionOutcome> {
        client.sanitize_and_submit(endpoint_id, self)
    }
}

impl Submittable for TalentApplication {
    fn send(&self, client: &FormClient, endpoint_id: &str) -> impl Future<Output = SubmissionOutcome> {
        client.submit_talent(endpoint_id, self)
    }
}

#[cfg(test)]
#[path = "machine_test.rs"]
mod tests;
