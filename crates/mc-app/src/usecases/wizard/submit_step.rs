use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

use mc_core::errors::{ErrorTarget, FormErrors, Notification};
use mc_core::ids::RecordId;
use mc_core::ports::{ApiError, MemberApiPort, NotificationPort, WriteMode};
use mc_core::records::payload::{batch_payload, record_payload};
use mc_core::records::{validate_rows, FormRow, StepRecord};
use mc_core::wizard::{SubmissionShape, WizardError};

use super::cancellation::unless_cancelled;
use super::controller::WizardController;
use super::fan_out::{returned_id, submit_each};
use super::step_form::StepForm;

const FAILURE_TITLE: &str = "Submission Failed";
const HIGHLIGHT_TEXT: &str = "Please correct the highlighted fields.";

/// Caller mistakes. Server failures are reported through
/// [`SubmitOutcome::Failed`] instead.
#[derive(Debug, Error)]
pub enum SubmitStepError {
    #[error("no member id is active; generate or open a member first")]
    NoActiveMember,

    #[error("failed to build request payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    /// Persisted; carries the server id when one is known.
    Saved(Option<RecordId>),
    Failed,
}

/// Per-row result of a fan-out submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOutcome {
    pub index: usize,
    pub status: RecordStatus,
}

/// What went wrong, already mapped onto the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureReport {
    pub field_errors: FormErrors,
    pub notification: Option<String>,
    /// Fan-out steps only: the fate of every row, including the saved ones.
    pub records: Vec<RecordOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Persisted. `advanced` tells whether the wizard moved to the next step.
    Saved { advanced: bool },
    /// Client-side validation failed; nothing was sent.
    Invalid,
    Failed(FailureReport),
    /// The page went away mid-request; the form was left untouched.
    Cancelled,
}

/// Save & Next for one step.
///
/// Update mode PATCHes, create mode POSTs. Single-record steps send a flat
/// record, batch steps send `{member_ID, data}`, and per-record steps fan
/// out one request per row.
pub struct SubmitStep {
    member_api: Arc<dyn MemberApiPort>,
    controller: Arc<WizardController>,
    notifier: Arc<dyn NotificationPort>,
}

impl SubmitStep {
    pub fn new(
        member_api: Arc<dyn MemberApiPort>,
        controller: Arc<WizardController>,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            member_api,
            controller,
            notifier,
        }
    }

    pub async fn execute<T: StepRecord>(
        &self,
        form: &mut StepForm<T>,
    ) -> Result<SubmitOutcome, SubmitStepError> {
        let span = info_span!(
            "usecase.submit_step.execute",
            step = T::STEP.title(),
            rows = form.rows().len()
        );
        self.run(form).instrument(span).await
    }

    async fn run<T: StepRecord>(
        &self,
        form: &mut StepForm<T>,
    ) -> Result<SubmitOutcome, SubmitStepError> {
        let client_errors = validate_rows(form.rows());
        if !client_errors.is_empty() {
            form.set_errors(client_errors);
            return Ok(SubmitOutcome::Invalid);
        }

        let state = self.controller.state().await;
        let member_id = state
            .member_id()
            .cloned()
            .ok_or(SubmitStepError::NoActiveMember)?;
        let mode = WriteMode::from_update_flag(state.is_update_mode());
        let token = self.controller.cancellation_token().await;

        let failure = match T::STEP.shape() {
            SubmissionShape::PerRecord => {
                let settled =
                    submit_each(&self.member_api, &token, &member_id, mode, form.rows()).await?;
                if settled.cancelled {
                    info!("submission cancelled");
                    return Ok(SubmitOutcome::Cancelled);
                }
                for record in &settled.records {
                    if let RecordStatus::Saved(Some(id)) = record.status {
                        form.rows_mut()[record.index].id = Some(id);
                    }
                }
                let wrote_any = settled
                    .records
                    .iter()
                    .any(|record| matches!(record.status, RecordStatus::Saved(_)));
                if mode == WriteMode::Update && settled.failure.is_some() && wrote_any {
                    self.controller.invalidate_member_detail(&member_id).await;
                }
                settled.failure
            }
            shape => {
                let (body, target) = match shape {
                    SubmissionShape::Single => {
                        let row = form.rows().first().cloned().unwrap_or_else(FormRow::blank);
                        (record_payload(&member_id, &row)?, ErrorTarget::Single)
                    }
                    _ => (batch_payload(&member_id, form.rows())?, ErrorTarget::Batch),
                };
                let request = self.member_api.write_step(T::STEP, mode, body);
                match unless_cancelled(&token, request).await {
                    Ok(data) => {
                        assign_returned_ids(form.rows_mut(), &data);
                        None
                    }
                    Err(ApiError::Cancelled) => {
                        info!("submission cancelled");
                        return Ok(SubmitOutcome::Cancelled);
                    }
                    Err(err) => {
                        warn!(error = %err, "step submission failed");
                        let report = err.envelope().to_report(target);
                        Some(FailureReport {
                            field_errors: report.field_errors,
                            notification: report.notification,
                            records: Vec::new(),
                        })
                    }
                }
            }
        };

        if let Some(failure) = failure {
            form.set_errors(failure.field_errors.clone());
            let text = failure
                .notification
                .clone()
                .unwrap_or_else(|| HIGHLIGHT_TEXT.to_string());
            self.notifier.notify(Notification::error(FAILURE_TITLE, text));
            return Ok(SubmitOutcome::Failed(failure));
        }

        let before = state.current_step();
        let Some(after) = self.controller.step_saved(T::STEP, &token).await? else {
            info!("submission cancelled after the write completed");
            return Ok(SubmitOutcome::Cancelled);
        };
        match mode {
            WriteMode::Create => form.reset(),
            WriteMode::Update => form.clear_errors(),
        }

        let verb = match mode {
            WriteMode::Create => "saved",
            WriteMode::Update => "updated",
        };
        self.notifier.notify(Notification::success(
            "Success",
            format!("{} {verb} successfully.", T::STEP.title()),
        ));

        let advanced = after.current_step() != before;
        info!(advanced, "step submission succeeded");
        Ok(SubmitOutcome::Saved { advanced })
    }
}

/// Pick up server ids from a success response: one object for single
/// records, an array aligned with the submitted rows for batches.
fn assign_returned_ids<T: StepRecord>(rows: &mut [FormRow<T>], data: &Value) {
    match data {
        Value::Array(items) => {
            for (row, item) in rows.iter_mut().zip(items) {
                if let Some(id) = returned_id(item) {
                    row.id = Some(id);
                }
            }
        }
        other => {
            if let (Some(row), Some(id)) = (rows.first_mut(), returned_id(other)) {
                row.id = Some(id);
            }
        }
    }
}
