//! Settle-all submission of independent records.
//!
//! One request per row, all in flight at once. Every outcome is collected
//! before reporting; a failed record never aborts its siblings and records
//! that were saved stay saved.

use std::sync::Arc;

use futures::future::join_all;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use mc_core::errors::ErrorTarget;
use mc_core::ids::{MemberId, RecordId};
use mc_core::ports::{ApiError, MemberApiPort, WriteMode};
use mc_core::records::payload::record_payload;
use mc_core::records::{FormRow, StepRecord};

use super::cancellation::unless_cancelled;
use super::submit_step::{FailureReport, RecordOutcome, RecordStatus};

/// Outcome of one fan-out round.
pub(crate) struct Settled {
    pub records: Vec<RecordOutcome>,
    pub failure: Option<FailureReport>,
    pub cancelled: bool,
}

pub(crate) async fn submit_each<T: StepRecord>(
    member_api: &Arc<dyn MemberApiPort>,
    token: &CancellationToken,
    member_id: &MemberId,
    mode: WriteMode,
    rows: &[FormRow<T>],
) -> Result<Settled, serde_json::Error> {
    let mut pending = Vec::new();
    let mut records = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        // Create mode never re-sends rows a previous partial round already saved.
        if mode == WriteMode::Create && row.is_saved() {
            records.push(RecordOutcome {
                index,
                status: RecordStatus::Saved(row.id),
            });
            continue;
        }

        let row_mode = if row.is_saved() {
            WriteMode::Update
        } else {
            WriteMode::Create
        };
        let body = record_payload(member_id, row)?;
        let api = member_api.clone();
        pending.push(async move {
            let result = unless_cancelled(token, api.write_step(T::STEP, row_mode, body)).await;
            (index, result)
        });
    }

    debug!(step = T::STEP.title(), requests = pending.len(), "fan-out submission");

    let mut failure: Option<FailureReport> = None;
    let mut cancelled = false;

    for (index, result) in join_all(pending).await {
        match result {
            Ok(data) => records.push(RecordOutcome {
                index,
                status: RecordStatus::Saved(returned_id(&data).or(rows[index].id)),
            }),
            Err(ApiError::Cancelled) => {
                cancelled = true;
                records.push(RecordOutcome {
                    index,
                    status: RecordStatus::Failed,
                });
            }
            Err(err) => {
                warn!(step = T::STEP.title(), index, error = %err, "record submission failed");
                let report = err.envelope().to_report(ErrorTarget::Record(index));
                let failure = failure.get_or_insert_with(FailureReport::default);
                failure.field_errors.merge(report.field_errors);
                if failure.notification.is_none() {
                    failure.notification = report.notification;
                }
                records.push(RecordOutcome {
                    index,
                    status: RecordStatus::Failed,
                });
            }
        }
    }

    records.sort_by_key(|record| record.index);
    if let Some(failure) = failure.as_mut() {
        failure.records = records.clone();
    }

    Ok(Settled {
        records,
        failure,
        cancelled,
    })
}

/// `id` of a saved record echoed back in the success envelope.
pub(crate) fn returned_id(data: &Value) -> Option<RecordId> {
    data.get("id").and_then(Value::as_u64).map(RecordId::new)
}
