//! Member wizard use cases.
//!
//! This module exposes the wizard controller and the per-step protocol.

mod cancellation;
mod context;
pub mod controller;
mod fan_out;
mod load_step_form;
mod member_detail;
mod remove_row;
mod step_form;
mod submit_step;

pub use controller::WizardController;
pub use load_step_form::{LoadStepError, LoadStepForm};
pub use member_detail::MemberDetailQuery;
pub use remove_row::{RemoveRowError, RemoveStepRow};
pub use step_form::StepForm;
pub use submit_step::{
    FailureReport, RecordOutcome, RecordStatus, SubmitOutcome, SubmitStep, SubmitStepError,
};
