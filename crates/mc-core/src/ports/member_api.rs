use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{MemberId, RecordId};
use crate::records::MemberDetail;
use crate::wizard::WizardStep;

use super::ApiError;

/// Create (POST) or update (PATCH).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    Create,
    Update,
}

impl WriteMode {
    pub fn from_update_flag(is_update_mode: bool) -> Self {
        if is_update_mode {
            WriteMode::Update
        } else {
            WriteMode::Create
        }
    }
}

/// Body of the member-ID generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextMemberIdRequest {
    pub membership_type: String,
    pub institute_name: String,
}

/// Member sub-resource endpoints.
#[async_trait::async_trait]
pub trait MemberApiPort: Send + Sync {
    async fn fetch_member_detail(&self, member_id: &MemberId) -> Result<MemberDetail, ApiError>;

    /// Write one step. `body` is either a batch payload or a flat record.
    /// Returns the `data` member of the success envelope.
    async fn write_step(
        &self,
        step: WizardStep,
        mode: WriteMode,
        body: Value,
    ) -> Result<Value, ApiError>;

    async fn delete_step_record(&self, step: WizardStep, record_id: RecordId)
        -> Result<(), ApiError>;

    async fn next_available_member_id(
        &self,
        request: &NextMemberIdRequest,
    ) -> Result<MemberId, ApiError>;
}
