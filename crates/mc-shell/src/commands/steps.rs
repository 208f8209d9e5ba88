use serde::Serialize;

use mc_core::wizard::{SubmissionShape, WizardStep};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSummary {
    pub index: usize,
    pub step: WizardStep,
    pub title: &'static str,
    pub submission: SubmissionShape,
    pub advances_on_update: bool,
    pub has_primary: bool,
}

pub fn wizard_steps() -> Vec<StepSummary> {
    WizardStep::ALL
        .iter()
        .map(|&step| StepSummary {
            index: step.index(),
            step,
            title: step.title(),
            submission: step.shape(),
            advances_on_update: step.advances_on_update(),
            has_primary: step.has_primary(),
        })
        .collect()
}
