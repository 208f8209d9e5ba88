use std::sync::Arc;

use thiserror::Error;
use tracing::{info_span, warn, Instrument};

use mc_core::errors::Notification;
use mc_core::ports::{ApiError, NotificationPort};
use mc_core::records::StepRecord;

use super::controller::WizardController;
use super::member_detail::MemberDetailQuery;
use super::step_form::StepForm;

#[derive(Debug, Error)]
pub enum LoadStepError {
    /// The page went away before the detail arrived.
    #[error("member detail request cancelled")]
    Cancelled,

    #[error("failed to fetch member detail: {0}")]
    Api(ApiError),

    #[error("member detail has an unexpected shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Step mount: prefill from the member detail in update mode, otherwise
/// start from a single template row.
pub struct LoadStepForm {
    controller: Arc<WizardController>,
    query: MemberDetailQuery,
    notifier: Arc<dyn NotificationPort>,
}

impl LoadStepForm {
    pub fn new(
        controller: Arc<WizardController>,
        query: MemberDetailQuery,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            controller,
            query,
            notifier,
        }
    }

    pub async fn execute<T: StepRecord>(&self) -> Result<StepForm<T>, LoadStepError> {
        let span = info_span!("usecase.load_step_form.execute", step = T::STEP.title());
        async {
            let state = self.controller.state().await;
            let member_id = match (state.is_update_mode(), state.member_id()) {
                (true, Some(member_id)) => member_id.clone(),
                _ => return Ok(StepForm::new()),
            };

            let token = self.controller.cancellation_token().await;
            let detail = match self.query.get(&member_id, &token).await {
                Ok(detail) => detail,
                Err(ApiError::Cancelled) => return Err(LoadStepError::Cancelled),
                Err(err) => {
                    warn!(member_id = %member_id, error = %err, "failed to load member detail");
                    self.notifier.notify(Notification::error(
                        "Failed to load member",
                        err.envelope().fallback_text(),
                    ));
                    return Err(LoadStepError::Api(err));
                }
            };

            match detail.rows::<T>() {
                Ok(rows) => Ok(StepForm::with_rows(rows)),
                Err(err) => {
                    warn!(member_id = %member_id, error = %err, "member detail did not decode");
                    self.notifier.notify(Notification::error(
                        "Failed to load member",
                        format!("{} data could not be read.", T::STEP.title()),
                    ));
                    Err(LoadStepError::Decode(err))
                }
            }
        }
        .instrument(span)
        .await
    }
}
