use async_trait::async_trait;
use serde_json::Value;
use tracing::{info_span, Instrument};

use mc_core::ids::{MemberId, RecordId};
use mc_core::ports::{ApiError, MemberApiPort, NextMemberIdRequest, WriteMode};
use mc_core::records::payload::MEMBER_ID_KEY;
use mc_core::records::MemberDetail;
use mc_core::wizard::WizardStep;

use super::client::ApiClient;
use super::endpoints;

/// [`MemberApiPort`] over the backend REST API.
///
/// Creates POST to the step collection. Updates PATCH the member's records
/// of that step, addressed by the `member_ID` carried in the body.
pub struct HttpMemberApi {
    client: ApiClient,
}

impl HttpMemberApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MemberApiPort for HttpMemberApi {
    async fn fetch_member_detail(&self, member_id: &MemberId) -> Result<MemberDetail, ApiError> {
        let data = self
            .client
            .get(&endpoints::member_detail(member_id))
            .instrument(info_span!("infra.member_api.fetch_detail", member_id = %member_id))
            .await?;
        match data {
            Value::Object(map) => Ok(MemberDetail::new(map)),
            other => Err(ApiError::Decode(format!(
                "member detail is not an object: {other}"
            ))),
        }
    }

    async fn write_step(
        &self,
        step: WizardStep,
        mode: WriteMode,
        body: Value,
    ) -> Result<Value, ApiError> {
        let span = info_span!("infra.member_api.write_step", step = step.title(), ?mode);
        async {
            match mode {
                WriteMode::Create => self.client.post(&endpoints::step_collection(step), &body).await,
                WriteMode::Update => {
                    let member_id = body
                        .get(MEMBER_ID_KEY)
                        .and_then(Value::as_str)
                        .ok_or_else(|| ApiError::Decode(format!("update body lacks {MEMBER_ID_KEY}")))?;
                    let path = endpoints::step_member(step, member_id);
                    self.client.patch(&path, &body).await
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn delete_step_record(
        &self,
        step: WizardStep,
        record_id: RecordId,
    ) -> Result<(), ApiError> {
        self.client
            .delete(&endpoints::step_record(step, record_id))
            .instrument(info_span!(
                "infra.member_api.delete_record",
                step = step.title(),
                record_id = %record_id
            ))
            .await
            .map(|_| ())
    }

    async fn next_available_member_id(
        &self,
        request: &NextMemberIdRequest,
    ) -> Result<MemberId, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let data = self.client.post(endpoints::NEXT_MEMBER_ID, &body).await?;
        let next = match data.get("next_available") {
            Some(Value::String(id)) => MemberId::parse(id),
            Some(Value::Number(n)) => MemberId::parse(&n.to_string()),
            _ => None,
        };
        next.ok_or_else(|| ApiError::Decode("response lacks next_available".to_string()))
    }
}
