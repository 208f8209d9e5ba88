//! Business logic use cases
//!
//! Dashboard shell:
//!
//! [Permissions fetch] → LoadNavigation → sidebar tree
//!
//! Member wizard (one `WizardController` per wizard page):
//!
//! route mount  → WizardController::enter_route
//! step mount   → LoadStepForm        → StepForm<T>
//! step submit  → SubmitStep          → StepSaved → next step
//! row delete   → RemoveStepRow
//! route unmount→ WizardController::leave_route (cancels in-flight requests)

pub mod member_id;
pub mod navigation;
pub mod wizard;

use std::sync::Arc;

use crate::deps::AppDeps;

pub use member_id::{GenerateMemberId, GenerateMemberIdError};
pub use navigation::{LoadNavigation, LoadedNavigation};
pub use wizard::{
    LoadStepError, LoadStepForm, MemberDetailQuery, RecordOutcome, RecordStatus, RemoveRowError,
    RemoveStepRow, StepForm, SubmitOutcome, SubmitStep, SubmitStepError, WizardController,
};

/// Use case accessor over the wired dependencies.
pub struct UseCases<'a> {
    deps: &'a AppDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a AppDeps) -> Self {
        Self { deps }
    }

    pub fn load_navigation(&self) -> LoadNavigation {
        LoadNavigation::new(self.deps.authorization.clone(), self.deps.dashboard_variant)
    }

    /// A fresh controller for one wizard page. Never share it across pages.
    pub fn wizard_controller(&self) -> Arc<WizardController> {
        Arc::new(WizardController::new(self.deps.member_detail_cache.clone()))
    }

    pub fn member_detail_query(&self) -> MemberDetailQuery {
        MemberDetailQuery::new(
            self.deps.member_api.clone(),
            self.deps.member_detail_cache.clone(),
        )
    }

    pub fn load_step_form(&self, controller: Arc<WizardController>) -> LoadStepForm {
        LoadStepForm::new(
            controller,
            self.member_detail_query(),
            self.deps.notifier.clone(),
        )
    }

    pub fn submit_step(&self, controller: Arc<WizardController>) -> SubmitStep {
        SubmitStep::new(
            self.deps.member_api.clone(),
            controller,
            self.deps.notifier.clone(),
        )
    }

    pub fn remove_step_row(&self, controller: Arc<WizardController>) -> RemoveStepRow {
        RemoveStepRow::new(
            self.deps.member_api.clone(),
            controller,
            self.deps.member_detail_cache.clone(),
            self.deps.notifier.clone(),
        )
    }

    pub fn generate_member_id(&self, controller: Arc<WizardController>) -> GenerateMemberId {
        GenerateMemberId::new(
            self.deps.member_api.clone(),
            controller,
            self.deps.notifier.clone(),
        )
    }
}
