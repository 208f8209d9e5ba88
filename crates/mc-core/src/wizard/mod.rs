//! Member wizard domain module.
//!
//! This module defines the twelve-step member onboarding/editing flow: the
//! step catalogue, the wizard state store, route-driven mode detection and
//! the pure transition function.

mod error;
mod route;
mod state;
pub mod state_machine;
mod step;

pub use error::WizardError;
pub use route::WizardRoute;
pub use state::WizardState;
pub use state_machine::{WizardAction, WizardEvent, WizardStateMachine};
pub use step::{SubmissionShape, WizardStep, TOTAL_STEPS};
