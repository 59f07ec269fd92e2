//! Form submission pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! `validate` checks untrusted input locally, `submit` posts sanitized
//! payloads to the form provider and folds every failure into a
//! [`SubmissionOutcome`], and `machine` tracks one form instance from idle
//! through submission so the page only has to render the current state.
//!
//! ERROR HANDLING
//! ==============
//! Nothing in this module returns an error to the page for a failed
//! submission. Transport and provider failures become outcomes with a
//! display message; only misuse of the state machine is reported as `Err`.

pub mod machine;
pub mod submit;
pub mod types;
pub mod validate;

pub use machine::{FormModel, FormPhase, FormState, SubmitRejected, Submittable};
pub use submit::{FormClient, SubmitError};
pub use types::{
    Category, EXPERTISE_AREAS, Field, FormSubmission, ServerErrors, SubmissionOutcome, TalentApplication,
    ValidationResult,
};
pub use validate::{validate, validate_email, validate_talent};
