use std::collections::BTreeSet;

use serde::Serialize;

use super::{WizardError, WizardStep, TOTAL_STEPS};
use crate::ids::MemberId;

/// State of one wizard instance.
///
/// 向导实例状态：当前步骤、已完成步骤、成员 ID 与模式。
///
/// Invariants held by every mutator:
/// - `current_step` is always a valid step index;
/// - `completed_steps` only contains valid step indices;
/// - update mode implies a member id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WizardState {
    current_step: usize,
    completed_steps: BTreeSet<usize>,
    member_id: Option<MemberId>,
    is_update_mode: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current(&self) -> WizardStep {
        // current_step is kept in range by every mutator
        WizardStep::from_index(self.current_step).unwrap_or(WizardStep::Membership)
    }

    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.completed_steps
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed_steps.contains(&index)
    }

    pub fn total_steps(&self) -> usize {
        TOTAL_STEPS
    }

    pub fn member_id(&self) -> Option<&MemberId> {
        self.member_id.as_ref()
    }

    pub fn is_update_mode(&self) -> bool {
        self.is_update_mode
    }

    /// Jump directly to a step. Any step may be selected regardless of
    /// which earlier steps were completed.
    pub fn set_current_step(&mut self, index: usize) -> Result<(), WizardError> {
        check_index(index)?;
        self.current_step = index;
        Ok(())
    }

    /// Advance by one, saturating at the last step.
    pub fn next_step(&mut self) {
        self.current_step = (self.current_step + 1).min(TOTAL_STEPS - 1);
    }

    pub fn mark_step_completed(&mut self, index: usize) -> Result<(), WizardError> {
        check_index(index)?;
        self.completed_steps.insert(index);
        Ok(())
    }

    pub fn set_member_id(&mut self, member_id: MemberId) {
        self.member_id = Some(member_id);
    }

    /// Clearing the member id also leaves update mode.
    pub fn clear_member_id(&mut self) {
        self.member_id = None;
        self.is_update_mode = false;
    }

    pub fn set_update_mode(&mut self, enabled: bool) -> Result<(), WizardError> {
        if enabled && self.member_id.is_none() {
            return Err(WizardError::MissingMemberId);
        }
        self.is_update_mode = enabled;
        Ok(())
    }

    /// Back to step 0 with nothing completed; identity is untouched.
    pub fn reset_progress(&mut self) {
        self.current_step = 0;
        self.completed_steps.clear();
    }

    /// Display-only progress, in percent.
    pub fn progress_percentage(&self) -> f64 {
        (self.current_step + 1) as f64 / TOTAL_STEPS as f64 * 100.0
    }
}

fn check_index(index: usize) -> Result<(), WizardError> {
    if index >= TOTAL_STEPS {
        return Err(WizardError::StepOutOfRange {
            index,
            total: TOTAL_STEPS,
        });
    }
    Ok(())
}
