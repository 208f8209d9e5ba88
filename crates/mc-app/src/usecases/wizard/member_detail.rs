use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use mc_core::ids::MemberId;
use mc_core::ports::{ApiError, MemberApiPort, MemberDetailCachePort};
use mc_core::records::MemberDetail;

use super::cancellation::unless_cancelled;

/// Cached member detail lookup.
///
/// Successful update-mode writes invalidate the entry, so the next read
/// after a save goes back to the server.
#[derive(Clone)]
pub struct MemberDetailQuery {
    member_api: Arc<dyn MemberApiPort>,
    cache: Arc<dyn MemberDetailCachePort>,
}

impl MemberDetailQuery {
    pub fn new(member_api: Arc<dyn MemberApiPort>, cache: Arc<dyn MemberDetailCachePort>) -> Self {
        Self { member_api, cache }
    }

    pub async fn get(
        &self,
        member_id: &MemberId,
        token: &CancellationToken,
    ) -> Result<MemberDetail, ApiError> {
        if let Some(detail) = self.cache.get(member_id).await {
            debug!(member_id = %member_id, "member detail cache hit");
            return Ok(detail);
        }

        let detail =
            unless_cancelled(token, self.member_api.fetch_member_detail(member_id)).await?;
        self.cache.put(member_id.clone(), detail.clone()).await;
        Ok(detail)
    }
}
