use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

use mc_core::errors::Notification;
use mc_core::ports::{ApiError, MemberApiPort, MemberDetailCachePort, NotificationPort};
use mc_core::records::StepRecord;

use super::cancellation::unless_cancelled;
use super::controller::WizardController;
use super::step_form::StepForm;

#[derive(Debug, Error)]
pub enum RemoveRowError {
    #[error("row {index} does not exist (form has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("delete request cancelled")]
    Cancelled,

    #[error("failed to delete record: {0}")]
    Api(ApiError),
}

/// Remove one row from a step form.
///
/// Unsaved rows are dropped locally. Persisted rows are deleted on the
/// server first and only dropped once that succeeds.
pub struct RemoveStepRow {
    member_api: Arc<dyn MemberApiPort>,
    controller: Arc<WizardController>,
    member_detail_cache: Arc<dyn MemberDetailCachePort>,
    notifier: Arc<dyn NotificationPort>,
}

impl RemoveStepRow {
    pub fn new(
        member_api: Arc<dyn MemberApiPort>,
        controller: Arc<WizardController>,
        member_detail_cache: Arc<dyn MemberDetailCachePort>,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            member_api,
            controller,
            member_detail_cache,
            notifier,
        }
    }

    pub async fn execute<T: StepRecord>(
        &self,
        form: &mut StepForm<T>,
        index: usize,
    ) -> Result<(), RemoveRowError> {
        let span = info_span!("usecase.remove_step_row.execute", step = T::STEP.title(), index);
        async {
            let len = form.rows().len();
            let record_id = form
                .rows()
                .get(index)
                .ok_or(RemoveRowError::RowOutOfRange { index, len })?
                .id;

            let Some(record_id) = record_id else {
                form.remove_local(index);
                return Ok(());
            };

            let token = self.controller.cancellation_token().await;
            let request = self.member_api.delete_step_record(T::STEP, record_id);
            match unless_cancelled(&token, request).await {
                Ok(()) => {}
                Err(ApiError::Cancelled) => return Err(RemoveRowError::Cancelled),
                Err(err) => {
                    warn!(record_id = %record_id, error = %err, "failed to delete record");
                    self.notifier.notify(Notification::error(
                        "Delete Failed",
                        err.envelope().fallback_text(),
                    ));
                    return Err(RemoveRowError::Api(err));
                }
            }

            form.remove_local(index);
            if let Some(member_id) = self.controller.state().await.member_id() {
                self.member_detail_cache.invalidate(member_id).await;
            }
            info!(record_id = %record_id, "record deleted");
            self.notifier.notify(Notification::success(
                "Deleted",
                format!("{} record deleted.", T::STEP.title()),
            ));
            Ok(())
        }
        .instrument(span)
        .await
    }
}
