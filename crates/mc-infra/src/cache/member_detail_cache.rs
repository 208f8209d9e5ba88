use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mc_core::ids::MemberId;
use mc_core::ports::MemberDetailCachePort;
use mc_core::records::MemberDetail;

/// Process-local member detail cache. Entries live until invalidated.
#[derive(Default)]
pub struct InMemoryMemberDetailCache {
    entries: RwLock<HashMap<MemberId, MemberDetail>>,
}

impl InMemoryMemberDetailCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberDetailCachePort for InMemoryMemberDetailCache {
    async fn get(&self, member_id: &MemberId) -> Option<MemberDetail> {
        self.entries.read().await.get(member_id).cloned()
    }

    async fn put(&self, member_id: MemberId, detail: MemberDetail) {
        self.entries.write().await.insert(member_id, detail);
    }

    async fn invalidate(&self, member_id: &MemberId) {
        if self.entries.write().await.remove(member_id).is_some() {
            tracing::debug!(member_id = %member_id, "member detail invalidated");
        }
    }
}
