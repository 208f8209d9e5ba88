use crate::ids::MemberId;
use crate::records::MemberDetail;

/// Member detail query cache, keyed by member id.
#[async_trait::async_trait]
pub trait MemberDetailCachePort: Send + Sync {
    async fn get(&self, member_id: &MemberId) -> Option<MemberDetail>;
    async fn put(&self, member_id: MemberId, detail: MemberDetail);
    async fn invalidate(&self, member_id: &MemberId);
}
