//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on mc-infra and mc-app at the same time.
//! It assembles adapters behind their ports and makes no decisions.

use std::sync::Arc;

use mc_app::AppDeps;
use mc_core::config::AppConfig;
use mc_infra::{ApiClient, HttpAuthorizationApi, HttpMemberApi, InMemoryMemberDetailCache};

use crate::adapters::TracingNotifier;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),

    #[error("API base URL is empty")]
    MissingBaseUrl,
}

/// Build the application dependencies from configuration.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    if config.api.base_url.trim().is_empty() {
        return Err(WiringError::MissingBaseUrl);
    }

    let client =
        ApiClient::new(&config.api).map_err(|e| WiringError::HttpClientInit(e.to_string()))?;
    tracing::debug!(base_url = client.base_url(), "backend client ready");

    Ok(AppDeps {
        member_api: Arc::new(HttpMemberApi::new(client.clone())),
        authorization: Arc::new(HttpAuthorizationApi::new(client)),
        member_detail_cache: Arc::new(InMemoryMemberDetailCache::new()),
        notifier: Arc::new(TracingNotifier),
        dashboard_variant: config.dashboard.variant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_core::navigation::DashboardVariant;

    #[test]
    fn test_wires_configured_variant() {
        let mut config = AppConfig::default();
        config.dashboard.variant = DashboardVariant::Accounts;

        let deps = wire_dependencies(&config).unwrap();
        assert_eq!(deps.dashboard_variant, DashboardVariant::Accounts);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = AppConfig::default();
        config.api.base_url = " ".to_string();
        assert!(matches!(
            wire_dependencies(&config),
            Err(WiringError::MissingBaseUrl)
        ));
    }
}
