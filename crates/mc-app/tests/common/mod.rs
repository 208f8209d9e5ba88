#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use mc_app::AppDeps;
use mc_core::errors::Notification;
use mc_core::ids::{MemberId, RecordId};
use mc_core::navigation::{DashboardVariant, UserPermissions};
use mc_core::ports::{
    ApiError, AuthorizationPort, MemberApiPort, MemberDetailCachePort, NextMemberIdRequest,
    NotificationPort, WriteMode,
};
use mc_core::records::MemberDetail;
use mc_core::wizard::WizardStep;

mock! {
    pub MemberApi {}

    #[async_trait]
    impl MemberApiPort for MemberApi {
        async fn fetch_member_detail(&self, member_id: &MemberId) -> Result<MemberDetail, ApiError>;
        async fn write_step(
            &self,
            step: WizardStep,
            mode: WriteMode,
            body: Value,
        ) -> Result<Value, ApiError>;
        async fn delete_step_record(
            &self,
            step: WizardStep,
            record_id: RecordId,
        ) -> Result<(), ApiError>;
        async fn next_available_member_id(
            &self,
            request: &NextMemberIdRequest,
        ) -> Result<MemberId, ApiError>;
    }
}

pub struct NoAuthorization;

#[async_trait]
impl AuthorizationPort for NoAuthorization {
    async fn fetch_user_permissions(&self) -> Result<UserPermissions, ApiError> {
        Err(ApiError::Transport("not wired".to_string()))
    }
}

#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<MemberId, MemberDetail>>,
    pub invalidated: Mutex<Vec<MemberId>>,
}

#[async_trait]
impl MemberDetailCachePort for MemoryCache {
    async fn get(&self, member_id: &MemberId) -> Option<MemberDetail> {
        self.entries.lock().unwrap().get(member_id).cloned()
    }

    async fn put(&self, member_id: MemberId, detail: MemberDetail) {
        self.entries.lock().unwrap().insert(member_id, detail);
    }

    async fn invalidate(&self, member_id: &MemberId) {
        self.entries.lock().unwrap().remove(member_id);
        self.invalidated.lock().unwrap().push(member_id.clone());
    }
}

#[derive(Default)]
pub struct Inbox {
    pub sent: Mutex<Vec<Notification>>,
}

impl NotificationPort for Inbox {
    fn notify(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}

impl Inbox {
    pub fn last(&self) -> Option<Notification> {
        self.sent.lock().unwrap().last().cloned()
    }
}

pub struct Harness {
    pub deps: AppDeps,
    pub cache: Arc<MemoryCache>,
    pub inbox: Arc<Inbox>,
}

pub fn harness(member_api: impl MemberApiPort + 'static) -> Harness {
    let cache = Arc::new(MemoryCache::default());
    let inbox = Arc::new(Inbox::default());
    let deps = AppDeps {
        member_api: Arc::new(member_api),
        authorization: Arc::new(NoAuthorization),
        member_detail_cache: cache.clone(),
        notifier: inbox.clone(),
        dashboard_variant: DashboardVariant::Admin,
    };
    Harness { deps, cache, inbox }
}

/// Log to the test harness when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
